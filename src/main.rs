use std::{fmt, process};

use clap::{Arg, ArgAction, Command};
use log::{info, LevelFilter};

use sm83_core::{CartridgeError, CpuError, GameBoy, GameBoyConfig};

const DEFAULT_MAX_STEPS: usize = 1_000_000;

#[derive(Debug)]
enum FrontError {
    CartridgeError(CartridgeError),
    CpuError(CpuError),
}

impl std::error::Error for FrontError {}

impl fmt::Display for FrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrontError::CartridgeError(e) => write!(f, "Could not load rom: {}", e),
            FrontError::CpuError(e) => write!(f, "CPU error: {}", e),
        }
    }
}

impl From<CartridgeError> for FrontError {
    fn from(err: CartridgeError) -> Self {
        FrontError::CartridgeError(err)
    }
}

impl From<CpuError> for FrontError {
    fn from(err: CpuError) -> Self {
        FrontError::CpuError(err)
    }
}

fn print_state(gameboy: &GameBoy) {
    let cpu = gameboy.cpu();

    println!("{}", cpu.registers());
    println!(
        "IME:{} HALT:{} cycles (frame/total): {}/{}",
        cpu.ime() as u8,
        cpu.is_halted() as u8,
        cpu.cycles_this_frame(),
        cpu.total_cycles()
    );
}

fn run(
    rom_file: &str,
    config: GameBoyConfig,
    max_steps: usize,
    disassemble: Option<usize>,
) -> Result<(), FrontError> {
    let mut gameboy = GameBoy::from_file(rom_file, config)?;
    info!("loaded {}", rom_file);

    if let Some(count) = disassemble {
        for instruction in gameboy.disassemble(count) {
            println!("{}", instruction);
        }
        return Ok(());
    }

    let result = gameboy.run_until_halt(max_steps);

    // the state is useful even when the CPU stopped on an error
    print_state(&gameboy);

    let steps = result?;
    if gameboy.cpu().is_halted() {
        info!("halted after {} steps", steps);
    } else {
        info!("step limit of {} reached", max_steps);
    }

    Ok(())
}

fn main() {
    let matches = Command::new("sm83")
        .version("0.1.0")
        .author("Amjad Alsharafi")
        .about("Runs a flat Gameboy(DMG) rom on the SM83 CPU core without any video or audio")
        .arg(Arg::new("rom").required(true))
        .arg(
            Arg::new("max_steps")
                .long("max-steps")
                .short('n')
                .default_value(format!("{}", DEFAULT_MAX_STEPS))
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("Stop after this many instructions if the program never reaches HALT"),
        )
        .arg(
            Arg::new("trace")
                .long("trace")
                .short('t')
                .action(ArgAction::SetTrue)
                .help("Log every executed instruction with the registers before it"),
        )
        .arg(
            Arg::new("disassemble")
                .long("disassemble")
                .short('d')
                .action(ArgAction::Set)
                .value_parser(clap::value_parser!(usize))
                .help("Print this many instructions from the entry point instead of running"),
        )
        .get_matches();

    let rom_file = matches.get_one::<String>("rom").expect("rom file argument");
    let max_steps = *matches
        .get_one::<usize>("max_steps")
        .unwrap_or(&DEFAULT_MAX_STEPS);
    let trace = matches.get_flag("trace");
    let disassemble = matches.get_one::<usize>("disassemble").copied();

    let mut logger = env_logger::Builder::from_default_env();
    if trace {
        logger.filter_module("sm83_core", LevelFilter::Trace);
    }
    logger.init();

    let config = GameBoyConfig {
        trace_execution: trace,
        ..GameBoyConfig::default()
    };

    if let Err(err) = run(rom_file, config, max_steps, disassemble) {
        eprintln!("{}", err);
        process::exit(1);
    }
}
