use super::TestingGameBoy;
use crate::cpu::CpuError;

/// Runs one instruction twice, first with `Z` set then with it cleared,
/// and returns `(cycles, pc)` for both runs
fn run_with_and_without_zero(gb: &mut TestingGameBoy) -> ((u8, u16), (u8, u16)) {
    let mut runs = [(0, 0); 2];

    for (run, f) in runs.iter_mut().zip([0x80, 0x00]) {
        let mut regs = gb.regs();
        regs.f = f;
        regs.sp = 0xC000;
        gb.restart_with(regs);

        let cycles = gb.step();
        *run = (cycles, gb.regs().pc);
    }

    (runs[0], runs[1])
}

#[test]
fn jr_conditional_timing() {
    // JR NZ,+5
    let mut gb = TestingGameBoy::with_program(&[0x20, 0x05]);

    let (not_taken, taken) = run_with_and_without_zero(&mut gb);
    assert_eq!(not_taken, (8, 0x0102));
    assert_eq!(taken, (12, 0x0107));
}

#[test]
fn jr_backwards() {
    // NOP, JR -3
    let mut gb = TestingGameBoy::with_program(&[0x00, 0x18, 0xFD]);

    assert_eq!(gb.run_steps(2), 16);
    assert_eq!(gb.regs().pc, 0x0100);
}

#[test]
fn jp_conditional_timing() {
    // JP NZ,$0200
    let mut gb = TestingGameBoy::with_program(&[0xC2, 0x00, 0x02]);

    let (not_taken, taken) = run_with_and_without_zero(&mut gb);
    assert_eq!(not_taken, (12, 0x0103));
    assert_eq!(taken, (16, 0x0200));
}

#[test]
fn call_conditional_timing() {
    // CALL NZ,$0200
    let mut gb = TestingGameBoy::with_program(&[0xC4, 0x00, 0x02]);

    let (not_taken, taken) = run_with_and_without_zero(&mut gb);
    assert_eq!(not_taken, (12, 0x0103));
    assert_eq!(taken, (24, 0x0200));

    // return address of the taken call
    assert_eq!(gb.regs().sp, 0xBFFE);
    assert_eq!(gb.read(0xBFFE), 0x03);
    assert_eq!(gb.read(0xBFFF), 0x01);
}

#[test]
fn ret_conditional_timing() {
    // RET NZ
    let mut gb = TestingGameBoy::with_program(&[0xC0]);
    gb.load(0xC000, &[0x34, 0x12]);

    let (not_taken, taken) = run_with_and_without_zero(&mut gb);
    assert_eq!(not_taken, (8, 0x0101));
    assert_eq!(taken, (20, 0x1234));
    assert_eq!(gb.regs().sp, 0xC002);
}

#[test]
fn unconditional_timing() {
    // (program, cycles, pc after)
    let cases: [(&[u8], u8, u16); 6] = [
        (&[0x18, 0x10], 12, 0x0112),       // JR
        (&[0xC3, 0x00, 0x02], 16, 0x0200), // JP
        (&[0xCD, 0x00, 0x02], 24, 0x0200), // CALL
        (&[0xC9], 16, 0xBEEF),             // RET
        (&[0xFF], 16, 0x0038),             // RST 38H
        (&[0xE9], 4, 0xC000),              // JP (HL)
    ];

    for (program, cycles, pc) in cases {
        let mut gb = TestingGameBoy::with_program(program);
        gb.load(0xC000, &[0xEF, 0xBE]);

        let mut regs = gb.regs();
        regs.sp = 0xC000;
        regs.h = 0xC0;
        regs.l = 0x00;
        gb.restart_with(regs);

        assert_eq!(gb.step(), cycles, "{:02X?}", program);
        assert_eq!(gb.regs().pc, pc, "{:02X?}", program);
    }
}

#[test]
fn call_and_return() {
    let mut gb = TestingGameBoy::with_program(&[0xCD, 0x10, 0x01, 0x00]);
    gb.write(0x0110, 0xC9);

    gb.step();
    assert_eq!(gb.regs().pc, 0x0110);
    assert_eq!(gb.regs().sp, 0xFFFC);

    gb.step();
    assert_eq!(gb.regs().pc, 0x0103);
    assert_eq!(gb.regs().sp, 0xFFFE);
}

#[test]
fn rst_pushes_next_address() {
    let mut gb = TestingGameBoy::with_program(&[0x00, 0xDF]);

    gb.run_steps(2);
    assert_eq!(gb.regs().pc, 0x0018);
    assert_eq!(gb.regs().sp, 0xFFFC);
    assert_eq!(gb.read(0xFFFC), 0x02);
    assert_eq!(gb.read(0xFFFD), 0x01);
}

#[test]
fn reti_enables_interrupts_immediately() {
    let mut gb = TestingGameBoy::with_program(&[0xD9]);
    gb.load(0xC000, &[0x00, 0x02]);

    let mut regs = gb.regs();
    regs.sp = 0xC000;
    gb.restart_with(regs);

    assert!(!gb.cpu.ime());
    assert_eq!(gb.step(), 16);
    assert!(gb.cpu.ime());
    assert_eq!(gb.regs().pc, 0x0200);
}

#[test]
fn prefix_slot_runs_the_prefixed_instruction() {
    // SWAP A, run through the `CB` slot of the base table
    let mut gb = TestingGameBoy::with_program(&[0xCB, 0x37]);

    let mut regs = gb.regs();
    regs.a = 0xF1;
    gb.restart_with(regs);
    // the CPU has moved past the prefix byte
    gb.cpu.set_pc(0x0101);

    let prefix = *gb.cpu.table().base(0xCB);
    let cycles = prefix.execute(&mut gb.cpu, &mut gb.bus).unwrap();

    assert_eq!(cycles, 8);
    assert_eq!(gb.regs().a, 0x1F);
    assert_eq!(gb.regs().pc, 0x0102);
}

#[test]
fn stop_is_two_bytes() {
    // STOP, INC A
    let mut gb = TestingGameBoy::with_program(&[0x10, 0x00, 0x3C]);

    gb.run_steps(2);
    assert_eq!(gb.regs().pc, 0x0103);
    assert_eq!(gb.regs().a, 0x02);
}

#[test]
fn illegal_opcodes_fail() {
    for opcode in [
        0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD,
    ] {
        let mut gb = TestingGameBoy::with_program(&[0x00, opcode]);
        gb.step();

        let err = gb.try_step().unwrap_err();
        assert_eq!(err, CpuError::IllegalOpcode { opcode, pc: 0x0101 });
        assert_eq!(err.pc(), 0x0101);
        // the CPU is left past the opcode
        assert_eq!(gb.regs().pc, 0x0102);
    }
}
