mod common;

use common::FlatBus;
use invaders_core::cpu::Intel8080;

#[test]
fn interrupt_injection_scenario() {
    let mut cpu = Intel8080::new();
    let mut bus = FlatBus::new();
    bus.load(0x0000, &[0xFB]); // EI
    cpu.step(&mut bus);
    assert!(cpu.inte());
    cpu.sp = 0x2400;
    cpu.pc = 0x01A0;

    let cycles = cpu.interrupt(&mut bus, 2);
    assert_eq!(cycles, 11);
    assert_eq!(bus.read(0x23FF), 0x01);
    assert_eq!(bus.read(0x23FE), 0xA0);
    assert_eq!(cpu.sp, 0x23FE);
    assert_eq!(cpu.pc, 0x0010);
    assert!(!cpu.inte());

    // INTE is now clear: a second injection is a no-op.
    let cycles2 = cpu.interrupt(&mut bus, 2);
    assert_eq!(cycles2, 0);
    assert_eq!(cpu.pc, 0x0010);
    assert_eq!(cpu.sp, 0x23FE);
}

#[test]
fn hlt_parks_cpu_until_interrupt() {
    let mut cpu = Intel8080::new();
    let mut bus = FlatBus::new();
    cpu.sp = 0x2400;
    bus.load(0x0000, &[0x76]); // HLT

    let cycles = cpu.step(&mut bus);
    assert_eq!(cycles, 7);
    assert!(cpu.is_halted());

    // Further steps make no progress while halted.
    let cycles2 = cpu.step(&mut bus);
    assert_eq!(cycles2, 0);
    assert!(cpu.is_halted());

    cpu.set_inte(true);
    cpu.interrupt(&mut bus, 1);
    assert!(!cpu.is_halted());
    assert_eq!(cpu.pc, 0x0008);
}

#[test]
fn di_ei_toggle_inte() {
    let mut cpu = Intel8080::new();
    let mut bus = FlatBus::new();
    assert!(!cpu.inte());
    bus.load(0x0000, &[0xFB, 0xF3]); // EI; DI
    cpu.step(&mut bus);
    assert!(cpu.inte());
    cpu.step(&mut bus);
    assert!(!cpu.inte());
}
