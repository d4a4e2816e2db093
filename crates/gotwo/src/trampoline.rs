//! The dispatch loop every procedure returns through.
//!
//! There are no indirect jumps: a callee cannot "return to whoever called
//! it". Instead it transfers to the trampoline, which pops the label the
//! caller pushed and selects the resume point from a closed set with one
//! exhaustive `match`.

use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Next};
use crate::{Error, Result};

impl<C: Console> Machine<C> {
    /// Decrement the depth and decode the label stored one slot above it.
    pub(crate) fn trampoline(&mut self) -> Result<Label> {
        let code = self.stack.pop()?;
        let label = Label::from_code(code)?;
        tracing::debug!(depth = self.stack.depth(), "return to {label}");
        Ok(label)
    }

    /// Execute the body of one label and report where control goes next.
    pub(crate) fn step(&mut self, label: Label) -> Result<Next> {
        self.steps += 1;
        match self.options.step_limit {
            Some(limit) if self.steps > limit => return Err(Error::StepLimitExceeded(limit)),
            _ => {}
        }
        tracing::trace!(depth = self.stack.depth(), "{label}");

        match label {
            Label::Exit => Ok(self.exit()),
            Label::Print => self.print(),
            Label::Scan => self.scan(),
            Label::Halt => Ok(Next::Halt),
            Label::Entry => self.entry(),
            Label::EntryPrompted => self.entry_prompted(),
            Label::EntryScanned => self.entry_scanned(),
            Label::EntryParsed => self.entry_parsed(),
            Label::EntryRejected => Ok(self.entry_rejected()),
            Label::EntryDone => Ok(self.entry_done()),
            Label::Mul => Ok(self.mul()),
            Label::MulLoop => self.mul_loop(),
            Label::Power => Ok(self.power()),
            Label::PowerLoop => self.power_loop(),
            Label::Fib => Ok(Self::fib()),
            Label::FibLoop => self.fib_loop(),
            Label::Atoi => Ok(self.atoi()),
            Label::AtoiLoop => self.atoi_loop(),
            Label::AtoiAccumulate => self.atoi_accumulate(),
            Label::DivMod => self.divmod(),
            Label::DivModLoop => self.divmod_loop(),
        }
    }
}
