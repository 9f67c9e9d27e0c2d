use super::TestingGameBoy;
use crate::cpu::CpuFlags;

fn bcd(value: u8) -> u8 {
    (value / 10) << 4 | (value % 10)
}

#[test]
fn flags_low_nibble_is_always_zero() {
    // ADD A,B / SUB B / ADC A,B / SBC A,B / DAA / RRA / CP B / INC A
    let opcodes = [0x80, 0x90, 0x88, 0x98, 0x27, 0x1F, 0xB8, 0x3C];
    let mut gb = TestingGameBoy::with_program(&[]);

    for opcode in opcodes {
        gb.load(0x0100, &[opcode]);

        for value in (0..=0xFFu16).step_by(7) {
            let mut regs = gb.regs();
            regs.a = value as u8;
            regs.b = (value as u8).rotate_left(3);
            regs.f = 0xF0;
            gb.restart_with(regs);

            gb.step();
            assert_eq!(gb.regs().f & 0x0F, 0, "opcode {:02X}", opcode);
        }
    }
}

#[test]
fn instructions_without_flag_effects_keep_f() {
    let mut gb = TestingGameBoy::with_program(&[]);
    let base: Vec<_> = (0..=0xFFu8)
        .map(|opcode| *gb.cpu.table().base(opcode))
        .filter(|inst| !inst.affects_flags)
        // the prefix runs whatever `CB` instruction follows it, and a
        // halted CPU would not run the rest
        .filter(|inst| inst.mnemonic != "ILLEGAL" && !matches!(inst.opcode, 0x76 | 0xCB))
        .collect();
    let prefixed: Vec<_> = (0..=0xFFu8)
        .map(|opcode| *gb.cpu.table().prefixed(opcode))
        .filter(|inst| !inst.affects_flags)
        .collect();

    assert!(!base.is_empty());
    assert_eq!(prefixed.len(), 128);

    for f in [0x00, 0x50, 0xA0, 0xF0] {
        for inst in base.iter().chain(prefixed.iter()) {
            let program = if inst.prefixed {
                [0xCB, inst.opcode, 0x00]
            } else {
                [inst.opcode, 0x00, 0xC0]
            };
            gb.load(0x0100, &program);

            let mut regs = gb.regs();
            regs.f = f;
            regs.h = 0xC0;
            regs.l = 0x10;
            regs.sp = 0xD000;
            gb.restart_with(regs);

            gb.step();
            assert_eq!(gb.regs().f, f, "{}", inst.mnemonic);
        }
    }
}

#[test]
fn push_pop_round_trip() {
    let programs: [(&str, &[u8]); 4] = [
        ("BC", &[0xC5, 0x01, 0x00, 0x00, 0xC1]), // PUSH BC, LD BC,$0000, POP BC
        ("DE", &[0xD5, 0x11, 0x00, 0x00, 0xD1]),
        ("HL", &[0xE5, 0x21, 0x00, 0x00, 0xE1]),
        ("AF", &[0xF5, 0xAF, 0xF1]), // PUSH AF, XOR A, POP AF
    ];

    for (name, program) in programs {
        let mut gb = TestingGameBoy::with_program(program);

        for value in [0x0000u16, 0x1234, 0xABCD, 0x00FF, 0xFFFF] {
            let (high, low) = ((value >> 8) as u8, value as u8);

            let mut regs = gb.regs();
            regs.a = high;
            regs.f = low;
            regs.b = high;
            regs.c = low;
            regs.d = high;
            regs.e = low;
            regs.h = high;
            regs.l = low;
            regs.sp = 0xFFFE;
            gb.restart_with(regs);

            gb.run_steps(3);

            let (result, expected) = match name {
                "BC" => (gb.cpu.bc(), value),
                "DE" => (gb.cpu.de(), value),
                "HL" => (gb.cpu.hl(), value),
                _ => (gb.cpu.af(), value & 0xFFF0),
            };

            assert_eq!(result, expected, "{} {:04X}", name, value);
            assert_eq!(gb.regs().sp, 0xFFFE);
        }
    }
}

#[test]
fn inc_and_dec_are_inverse() {
    // INC, DEC, DEC, INC on A and on B
    for program in [[0x3C, 0x3D, 0x3D, 0x3C], [0x04, 0x05, 0x05, 0x04]] {
        let mut gb = TestingGameBoy::with_program(&program);

        for value in 0..=0xFFu8 {
            for carry in [false, true] {
                let mut regs = gb.regs();
                regs.a = value;
                regs.b = value;
                regs.f = if carry { 0x10 } else { 0x00 };
                gb.restart_with(regs);

                // DEC(INC(v))
                gb.run_steps(2);
                assert_eq!(gb.regs().a, value);
                assert_eq!(gb.regs().b, value);
                assert_eq!(gb.cpu.flag(CpuFlags::C), carry);
                assert!(gb.cpu.flag(CpuFlags::N));
                assert_eq!(gb.cpu.flag(CpuFlags::Z), value == 0);

                // INC(DEC(v))
                gb.run_steps(2);
                assert_eq!(gb.regs().a, value);
                assert_eq!(gb.regs().b, value);
                assert_eq!(gb.cpu.flag(CpuFlags::C), carry);
                assert!(!gb.cpu.flag(CpuFlags::N));
                assert_eq!(gb.cpu.flag(CpuFlags::Z), value == 0);
            }
        }
    }
}

#[test]
fn daa_after_bcd_addition() {
    // ADD A,B / DAA
    let mut gb = TestingGameBoy::with_program(&[0x80, 0x27]);

    for a in 0..100u8 {
        for b in 0..100u8 {
            let mut regs = gb.regs();
            regs.a = bcd(a);
            regs.b = bcd(b);
            regs.f = 0;
            gb.restart_with(regs);

            gb.run_steps(2);

            let sum = a as u16 + b as u16;
            assert_eq!(gb.regs().a, bcd((sum % 100) as u8), "{} + {}", a, b);
            assert_eq!(gb.cpu.flag(CpuFlags::C), sum >= 100);
            assert_eq!(gb.cpu.flag(CpuFlags::Z), sum % 100 == 0);
            assert!(!gb.cpu.flag(CpuFlags::H));
        }
    }
}

#[test]
fn daa_after_bcd_subtraction() {
    // SUB B / DAA
    let mut gb = TestingGameBoy::with_program(&[0x90, 0x27]);

    for a in 0..100u8 {
        for b in 0..100u8 {
            let mut regs = gb.regs();
            regs.a = bcd(a);
            regs.b = bcd(b);
            regs.f = 0;
            gb.restart_with(regs);

            gb.run_steps(2);

            let difference = (a as u16 + 100 - b as u16) % 100;
            assert_eq!(gb.regs().a, bcd(difference as u8), "{} - {}", a, b);
            assert_eq!(gb.cpu.flag(CpuFlags::C), a < b);
            assert!(gb.cpu.flag(CpuFlags::N));
        }
    }
}
