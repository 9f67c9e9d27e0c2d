use crate::cartridge::{Cartridge, CartridgeError};
use crate::cpu::{CpuBusProvider, CpuError, CpuRegisters};
use crate::memory::InterruptType;
use crate::{GameBoy, GameBoyConfig};

/// Builds a ROM from `(address, bytes)` pieces
fn rom(pieces: &[(usize, &[u8])]) -> Cartridge {
    let mut data = vec![0; 0x200];
    for (addr, bytes) in pieces {
        data[*addr..*addr + bytes.len()].copy_from_slice(bytes);
    }
    Cartridge::from_bytes(&data)
}

fn store_routine_rom() -> Cartridge {
    rom(&[
        // LD A,$11 / CALL $0110 / LD A,$22 / CALL $0110 / HALT
        (0x100, &[0x3E, 0x11, 0xCD, 0x10, 0x01, 0x3E, 0x22, 0xCD, 0x10, 0x01, 0x76]),
        // LD ($C000),A / RET
        (0x110, &[0xEA, 0x00, 0xC0, 0xC9]),
    ])
}

#[test]
fn runs_program_until_halt() {
    let mut gb = GameBoy::new(store_routine_rom(), GameBoyConfig::default());

    let steps = gb.run_until_halt(100).unwrap();

    assert_eq!(steps, 9);
    assert!(gb.cpu().is_halted());
    assert_eq!(gb.bus().read(0xC000), 0x22);
    assert_eq!(gb.cpu().registers().a, 0x22);
    assert_eq!(gb.cpu().sp(), 0xFFFE);
    assert_eq!(gb.cpu().pc(), 0x010B);
    assert_eq!(gb.cpu().total_cycles(), 8 + 24 + 16 + 16 + 8 + 24 + 16 + 16 + 4);
}

#[test]
fn run_until_halt_stops_at_step_limit() {
    // JR -2
    let mut gb = GameBoy::new(rom(&[(0x100, &[0x18, 0xFE])]), GameBoyConfig::default());

    assert_eq!(gb.run_until_halt(50).unwrap(), 50);
    assert!(!gb.cpu().is_halted());
    assert_eq!(gb.cpu().pc(), 0x0100);
    assert_eq!(gb.cpu().total_cycles(), 50 * 12);
}

#[test]
fn reset_state() {
    let gb = GameBoy::new(Cartridge::default(), GameBoyConfig::default());

    assert_eq!(
        gb.cpu().registers(),
        CpuRegisters {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        }
    );
    assert_eq!(
        gb.cpu().registers().to_string(),
        "AF:01B0 BC:0013 DE:00D8 HL:014D SP:FFFE PC:0100"
    );
    assert!(!gb.cpu().ime());
    assert!(!gb.cpu().is_halted());
    assert_eq!(gb.cpu().total_cycles(), 0);
    assert_eq!(gb.bus().read(0xFF0F), 0xE0);
    assert_eq!(gb.bus().read(0xFFFF), 0x00);
}

#[test]
fn disassembly_does_not_change_state() {
    let gb = GameBoy::new(store_routine_rom(), GameBoyConfig::default());
    let regs = gb.cpu().registers();

    let first = gb.disassemble(5);
    let second = gb.disassemble(5);

    let lines: Vec<String> = first.iter().map(|inst| inst.to_string()).collect();
    assert_eq!(
        lines,
        [
            "0100: 3E 11    LD A,$11",
            "0102: CD 10 01 CALL $0110",
            "0105: 3E 22    LD A,$22",
            "0107: CD 10 01 CALL $0110",
            "010A: 76       HALT",
        ]
    );
    assert_eq!(
        second.iter().map(|inst| inst.to_string()).collect::<Vec<_>>(),
        lines
    );

    assert_eq!(gb.cpu().registers(), regs);
    assert_eq!(gb.cpu().total_cycles(), 0);
    assert_eq!(
        gb.cpu().next_instruction().map(|inst| inst.mnemonic),
        Some("LD A,n")
    );
}

#[test]
fn next_instruction_follows_pc() {
    let mut gb = GameBoy::new(store_routine_rom(), GameBoyConfig::default());

    gb.step().unwrap();
    assert_eq!(
        gb.cpu().next_instruction().map(|inst| inst.mnemonic),
        Some("CALL nn")
    );

    gb.step().unwrap();
    assert_eq!(
        gb.cpu().next_instruction().map(|inst| inst.mnemonic),
        Some("LD (nn),A")
    );
}

#[test]
fn clock_for_frame_carries_overshoot() {
    let config = GameBoyConfig {
        cycles_per_frame: 100,
        ..GameBoyConfig::default()
    };
    // JR -2, 12 cycles each
    let mut gb = GameBoy::new(rom(&[(0x100, &[0x18, 0xFE])]), config);

    // 9 jumps, 8 cycles past the frame
    gb.clock_for_frame().unwrap();
    assert_eq!(gb.cpu().cycles_this_frame(), 8);
    assert_eq!(gb.cpu().total_cycles(), 9 * 12);

    // 8 + 8 jumps reach 104
    gb.clock_for_frame().unwrap();
    assert_eq!(gb.cpu().cycles_this_frame(), 4);
    assert_eq!(gb.cpu().total_cycles(), 17 * 12);
}

#[test]
fn frame_counter_accumulates_between_frames() {
    let mut gb = GameBoy::new(rom(&[(0x100, &[0x00, 0x00, 0x00])]), GameBoyConfig::default());

    gb.step().unwrap();
    gb.step().unwrap();
    assert_eq!(gb.cpu().cycles_this_frame(), 8);
    assert_eq!(gb.cpu().total_cycles(), 8);
}

#[test]
fn illegal_opcode_stops_execution() {
    let mut gb = GameBoy::new(rom(&[(0x100, &[0x00, 0xDD])]), GameBoyConfig::default());

    let err = gb.run_until_halt(10).unwrap_err();
    assert_eq!(
        err,
        CpuError::IllegalOpcode {
            opcode: 0xDD,
            pc: 0x0101
        }
    );
    assert_eq!(
        err.to_string(),
        "Illegal opcode DD at 0101"
    );
}

#[test]
fn requested_interrupt_wakes_and_dispatches() {
    let cartridge = rom(&[
        // INC A / RETI
        (0x40, &[0x3C, 0xD9]),
        // EI / HALT / NOP
        (0x100, &[0xFB, 0x76, 0x00]),
    ]);
    let mut gb = GameBoy::new(cartridge, GameBoyConfig::default());
    gb.bus_mut().write(0xFFFF, 0x01);

    assert_eq!(gb.run_until_halt(10).unwrap(), 2);
    assert!(gb.cpu().ime());

    gb.request_interrupt(InterruptType::Vblank);
    assert_eq!(gb.bus().read(0xFF0F), 0xE1);

    assert_eq!(gb.step().unwrap(), 24);
    assert_eq!(gb.cpu().pc(), 0x0040);
    assert_eq!(gb.bus().read(0xFF0F), 0xE0);

    gb.step().unwrap();
    assert_eq!(gb.cpu().registers().a, 0x02);

    gb.step().unwrap();
    assert_eq!(gb.cpu().pc(), 0x0102);
    assert!(gb.cpu().ime());
}

#[test]
fn missing_rom_file() {
    let result = GameBoy::from_file("this/rom/does/not/exist.gb", GameBoyConfig::default());

    assert!(matches!(result, Err(CartridgeError::FileError(_))));
}

#[test]
fn empty_rom_file() {
    let path = std::env::temp_dir().join(format!("sm83-empty-{}.gb", std::process::id()));
    std::fs::write(&path, b"").unwrap();

    let result = GameBoy::from_file(&path, GameBoyConfig::default());
    std::fs::remove_file(&path).unwrap();

    assert!(matches!(result, Err(CartridgeError::EmptyRom)));
}

#[test]
fn rom_file_is_loaded() {
    let path = std::env::temp_dir().join(format!("sm83-rom-{}.gb", std::process::id()));
    let mut data = vec![0; 0x110];
    data[0x100..0x103].copy_from_slice(&[0x3E, 0x42, 0x76]);
    std::fs::write(&path, &data).unwrap();

    let mut gb = GameBoy::from_file(&path, GameBoyConfig::default()).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(gb.file_path(), Some(path.as_path()));
    gb.run_until_halt(10).unwrap();
    assert_eq!(gb.cpu().registers().a, 0x42);
}
