use super::TestingGameBoy;
use crate::cpu::{INTERRUPT_ENABLE_ADDR, INTERRUPT_FLAGS_ADDR};

fn with_interrupts(program: &[u8], enabled: u8, requested: u8) -> TestingGameBoy {
    let mut gb = TestingGameBoy::with_program(program);
    gb.write(INTERRUPT_ENABLE_ADDR, enabled);
    gb.write(INTERRUPT_FLAGS_ADDR, requested);
    gb
}

#[test]
fn dispatch_pushes_pc_and_jumps_to_vector() {
    let mut gb = with_interrupts(&[0x00, 0x00], 0x1F, 0x01);
    gb.cpu.set_ime(true);

    // NOP and the dispatch in the same step
    assert_eq!(gb.step(), 4 + 20);

    assert_eq!(gb.regs().pc, 0x0040);
    assert_eq!(gb.regs().sp, 0xFFFC);
    assert_eq!(gb.read(0xFFFC), 0x01);
    assert_eq!(gb.read(0xFFFD), 0x01);
    assert_eq!(gb.read(INTERRUPT_FLAGS_ADDR), 0x00);
    assert!(!gb.cpu.ime());
    assert_eq!(gb.cpu.total_cycles(), 24);
}

#[test]
fn lowest_bit_has_priority() {
    // timer and joypad
    let mut gb = with_interrupts(&[0x00], 0x1F, 0x14);
    gb.cpu.set_ime(true);

    gb.step();
    assert_eq!(gb.regs().pc, 0x0050);
    assert_eq!(gb.read(INTERRUPT_FLAGS_ADDR), 0x10);
}

#[test]
fn only_enabled_interrupts_dispatch() {
    let mut gb = with_interrupts(&[0x00, 0x00], 0x00, 0x1F);
    gb.cpu.set_ime(true);

    assert_eq!(gb.step(), 4);
    assert_eq!(gb.regs().pc, 0x0101);

    gb.write(INTERRUPT_ENABLE_ADDR, 0x08);
    gb.step();
    assert_eq!(gb.regs().pc, 0x0058);
    assert_eq!(gb.read(INTERRUPT_FLAGS_ADDR), 0x17);
}

#[test]
fn ei_takes_effect_after_the_next_instruction() {
    // EI, NOP, NOP
    let mut gb = with_interrupts(&[0xFB, 0x00, 0x00], 0x1F, 0x00);

    gb.step();
    assert!(!gb.cpu.ime());

    gb.step();
    assert!(gb.cpu.ime());
    assert_eq!(gb.regs().pc, 0x0102);
}

#[test]
fn ei_then_dispatch() {
    // EI, NOP, NOP
    let mut gb = with_interrupts(&[0xFB, 0x00, 0x00], 0x1F, 0x01);

    // not serviced right after `EI`
    assert_eq!(gb.step(), 4);
    assert_eq!(gb.regs().pc, 0x0101);

    // the NOP runs, then the interrupt is taken
    assert_eq!(gb.step(), 24);
    assert_eq!(gb.regs().pc, 0x0040);
    assert_eq!(gb.read(0xFFFC), 0x02);
    assert_eq!(gb.read(0xFFFD), 0x01);
}

#[test]
fn ei_followed_by_di_never_enables() {
    // EI, DI, NOP, NOP
    let mut gb = with_interrupts(&[0xFB, 0xF3, 0x00, 0x00], 0x1F, 0x1F);

    for _ in 0..4 {
        gb.step();
        assert!(!gb.cpu.ime());
    }
    assert_eq!(gb.regs().pc, 0x0104);
    assert_eq!(gb.regs().sp, 0xFFFE);
    assert_eq!(gb.read(INTERRUPT_FLAGS_ADDR), 0x1F);
}

#[test]
fn halt_idles_until_an_interrupt_is_pending() {
    // HALT, INC A
    let mut gb = with_interrupts(&[0x76, 0x3C], 0x04, 0x00);

    gb.step();
    assert!(gb.cpu.is_halted());

    for _ in 0..3 {
        assert_eq!(gb.step(), 4);
        assert!(gb.cpu.is_halted());
        assert_eq!(gb.regs().pc, 0x0101);
    }

    // a request that is not enabled does not wake the CPU
    gb.write(INTERRUPT_FLAGS_ADDR, 0x01);
    gb.step();
    assert!(gb.cpu.is_halted());

    // with IME off, execution continues after HALT without a dispatch
    gb.write(INTERRUPT_FLAGS_ADDR, 0x04);
    assert_eq!(gb.step(), 4);
    assert!(!gb.cpu.is_halted());
    assert_eq!(gb.regs().a, 0x02);
    assert_eq!(gb.regs().pc, 0x0102);
    assert_eq!(gb.read(INTERRUPT_FLAGS_ADDR), 0x04);
}

#[test]
fn halt_with_ime_dispatches() {
    // HALT, NOP
    let mut gb = with_interrupts(&[0x76, 0x00], 0x01, 0x00);
    gb.cpu.set_ime(true);

    gb.step();
    assert!(gb.cpu.is_halted());

    gb.write(INTERRUPT_FLAGS_ADDR, 0x01);
    assert_eq!(gb.step(), 4 + 20);

    assert!(!gb.cpu.is_halted());
    assert_eq!(gb.regs().pc, 0x0040);
    // returns to the instruction after HALT
    assert_eq!(gb.read(0xFFFC), 0x01);
    assert_eq!(gb.read(0xFFFD), 0x01);
}

#[test]
fn interrupt_pending_at_halt_runs_the_handler() {
    // EI, HALT, NOP
    let mut gb = with_interrupts(&[0xFB, 0x76, 0x00], 0x01, 0x01);
    // INC A, RETI
    gb.load(0x0040, &[0x3C, 0xD9]);

    gb.step();
    // HALT and the dispatch in the same step
    assert_eq!(gb.step(), 4 + 20);
    assert_eq!(gb.regs().pc, 0x0040);
    assert!(!gb.cpu.is_halted());

    gb.step();
    assert_eq!(gb.regs().a, 0x02);

    gb.step();
    assert_eq!(gb.regs().pc, 0x0102);
    assert!(gb.cpu.ime());
    assert!(!gb.cpu.is_halted());
}
