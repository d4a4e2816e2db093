//! Test harness for gotwo unit and integration tests
//!
//! Provides an in-memory [`Console`] and helpers that load the argument
//! registers, invoke one procedure from the host, and hand back the machine
//! for inspection.
//!
//! # Example
//!
//! ```rust
//! use gotwo::Label;
//! use gotwo::test_harness::*;
//!
//! let (machine, _) = invoke(Label::Power, &[2, 10]).expect("POWER failed");
//! assert_eq!(machine.registers().returns()[0], 1024);
//! ```

#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

use std::io;

use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Outcome, Word};
use crate::Result;

/// Console backed by byte buffers.
#[derive(Debug, Default, Clone)]
pub struct BufferConsole {
    input: Vec<u8>,
    cursor: usize,
    output: Vec<u8>,
}

impl BufferConsole {
    pub fn with_input(input: &[u8]) -> Self {
        Self {
            input: input.to_vec(),
            ..Self::default()
        }
    }

    pub fn output(&self) -> &[u8] {
        &self.output
    }

    pub fn remaining_input(&self) -> &[u8] {
        &self.input[self.cursor..]
    }
}

impl Console for BufferConsole {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.output.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = self.remaining_input();
        let len = available.len().min(buf.len());
        buf[..len].copy_from_slice(&available[..len]);
        self.cursor += len;
        Ok(len)
    }
}

/// Invoke `target` with `args` in `A0..`.
pub fn invoke(target: Label, args: &[Word]) -> Result<(Machine<BufferConsole>, Outcome)> {
    let mut machine = Machine::new(BufferConsole::default());
    machine.registers_mut().load_args(args)?;
    let outcome = machine.invoke(target)?;
    Ok((machine, outcome))
}

/// Invoke `target` with one byte of `bytes` per argument register.
pub fn invoke_with_bytes(
    target: Label,
    bytes: &[u8],
) -> Result<(Machine<BufferConsole>, Outcome)> {
    let mut machine = Machine::new(BufferConsole::default());
    machine.registers_mut().load_arg_bytes(bytes)?;
    let outcome = machine.invoke(target)?;
    Ok((machine, outcome))
}

/// Invoke `target` with `input` waiting on the console.
pub fn invoke_with_input(
    target: Label,
    input: &[u8],
) -> Result<(Machine<BufferConsole>, Outcome)> {
    let mut machine = Machine::new(BufferConsole::with_input(input));
    let outcome = machine.invoke(target)?;
    Ok((machine, outcome))
}

/// Boot the ENTRY program with `input` waiting on the console.
pub fn boot_with_input(input: &[u8]) -> Result<(Machine<BufferConsole>, Outcome)> {
    let mut machine = Machine::new(BufferConsole::with_input(input));
    let outcome = machine.boot()?;
    Ok((machine, outcome))
}

/// Decimal digits of `value` as argument bytes, for ATOI.
pub fn digits(value: u64) -> Vec<u8> {
    value.to_string().into_bytes()
}
