//! End-to-end tests for the calling convention: scenarios driven from the
//! host, nested calls through the trampoline, and the fatal error paths.

use gotwo::abi::{ATOI_EMPTY, ATOI_OK};
use gotwo::test_harness::*;
use gotwo::{Error, Label, Machine, MachineOptions, Outcome};

#[test]
fn test_power_two_to_the_tenth() {
    let (machine, outcome) = invoke(Label::Power, &[2, 10]).expect("POWER failed");
    assert_eq!(outcome, Outcome::Returned);
    assert_eq!(machine.registers().returns()[0], 1024);
}

#[test]
fn test_mul_seven_by_six() {
    let (machine, _) = invoke(Label::Mul, &[7, 6]).expect("MUL failed");
    assert_eq!(machine.registers().returns()[0], 42);
}

#[test]
fn test_atoi_one_two_three() {
    let (machine, _) = invoke_with_bytes(Label::Atoi, b"123").expect("ATOI failed");
    let r = machine.registers().returns();
    assert_eq!(r[0], 123);
    assert_eq!(r[1], ATOI_OK);
}

#[test]
fn test_atoi_empty_skips_the_loop() {
    let (machine, _) = invoke_with_bytes(Label::Atoi, b"").expect("ATOI failed");
    assert_eq!(machine.registers().returns()[1], ATOI_EMPTY);
    // ATOI, then HALT: no MUL, no loop iteration.
    assert_eq!(machine.steps(), 2);
}

#[test]
fn test_nested_calls_restore_depth() {
    // ATOI calls MUL once per digit after the first, each from depth 0 to 1.
    let (machine, _) = invoke_with_bytes(Label::Atoi, b"4096").expect("ATOI failed");
    assert_eq!(machine.registers().returns()[0], 4096);
    assert_eq!(machine.return_stack().max_depth(), 1);
    assert_eq!(machine.return_stack().depth(), -1);
}

#[test]
fn test_machine_is_reusable() {
    let mut machine = Machine::new(BufferConsole::default());

    machine.registers_mut().load_args(&[3, 4]).unwrap();
    assert_eq!(machine.invoke(Label::Power).unwrap(), Outcome::Returned);
    assert_eq!(machine.registers().returns()[0], 81);

    machine.registers_mut().load_args(&[3, 4]).unwrap();
    assert_eq!(machine.invoke(Label::Mul).unwrap(), Outcome::Returned);
    assert_eq!(machine.registers().returns()[0], 12);
}

#[test]
fn test_machines_are_isolated() {
    let mut first = Machine::new(BufferConsole::default());
    let mut second = Machine::new(BufferConsole::default());
    first.registers_mut().load_args(&[5, 5]).unwrap();
    second.registers_mut().load_args(&[6, 6]).unwrap();

    first.invoke(Label::Mul).unwrap();
    second.invoke(Label::Mul).unwrap();
    assert_eq!(first.registers().returns()[0], 25);
    assert_eq!(second.registers().returns()[0], 36);
}

#[test]
fn test_exit_from_nested_context() {
    let (_, outcome) = invoke(Label::Exit, &[-1]).expect("EXIT failed");
    assert_eq!(outcome, Outcome::Exited(-1));
}

#[test]
fn test_step_limit() {
    let options = MachineOptions {
        step_limit: Some(5),
    };
    let mut machine = Machine::with_options(BufferConsole::default(), options);
    machine.registers_mut().load_args(&[1, 100]).unwrap();
    let err = machine.invoke(Label::Mul).unwrap_err();
    assert!(matches!(err, Error::StepLimitExceeded(5)), "got {err}");
}

#[test]
fn test_corrupted_return_label_is_fatal() {
    let mut machine = Machine::new(BufferConsole::default());
    machine.return_stack_mut().push(Label::Halt).unwrap();
    machine.return_stack_mut().push_code(-42).unwrap();
    let err = machine.resume().unwrap_err();
    assert!(matches!(err, Error::UnknownLabel(-42)), "got {err}");
    assert!(err.to_string().contains("-42"));
}

#[test]
fn test_boot_round_trip_through_console() {
    let (machine, outcome) = boot_with_input(b"6\n").expect("boot failed");
    assert_eq!(outcome, Outcome::Exited(13));
    assert_eq!(machine.console().output(), b"n? ");
    assert!(machine.console().remaining_input().is_empty());
}

#[test]
fn test_boot_multi_digit_uses_nested_mul() {
    let (machine, outcome) = boot_with_input(b"12\n").expect("boot failed");
    assert_eq!(outcome, Outcome::Exited(233));
    // HALT sits at depth 0, ATOI's resume label at 1, MUL's at 2.
    assert_eq!(machine.return_stack().max_depth(), 2);
}
