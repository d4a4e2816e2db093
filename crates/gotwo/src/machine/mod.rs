mod registers;
mod stack;

pub use registers::{Reg, RegisterFile, Word};
pub use stack::ReturnStack;

use crate::abi::IO_BUFFER_SIZE;
use crate::host::Console;
use crate::label::Label;
use crate::Result;

/// Knobs for a [`Machine`] run.
#[derive(Debug, Clone, Default)]
pub struct MachineOptions {
    /// Fail with [`crate::Error::StepLimitExceeded`] after this many label
    /// bodies have executed. `None` runs until EXIT or HALT.
    pub step_limit: Option<u64>,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// EXIT was called with this code.
    Exited(i32),
    /// The HALT sentinel at the bottom of the return stack was resumed.
    Returned,
}

/// Transition produced by a label body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Next {
    /// Jump directly to a label (loop back-edge, tail jump, or call target).
    Jump(Label),
    /// Go through the trampoline.
    Return,
    Exit(i32),
    Halt,
}

/// A single register machine: both register files, the return stack, the
/// I/O buffer, and the console the host shims talk to.
#[derive(Debug)]
pub struct Machine<C> {
    pub(crate) regs: RegisterFile,
    pub(crate) stack: ReturnStack,
    pub(crate) io: [u8; IO_BUFFER_SIZE],
    pub(crate) console: C,
    pub(crate) options: MachineOptions,
    pub(crate) steps: u64,
}

impl<C: Console> Machine<C> {
    pub fn new(console: C) -> Self {
        Self::with_options(console, MachineOptions::default())
    }

    pub fn with_options(console: C, options: MachineOptions) -> Self {
        Self {
            regs: RegisterFile::new(),
            stack: ReturnStack::new(),
            io: [0; IO_BUFFER_SIZE],
            console,
            options,
            steps: 0,
        }
    }

    #[must_use]
    pub fn registers(&self) -> &RegisterFile {
        &self.regs
    }

    pub fn registers_mut(&mut self) -> &mut RegisterFile {
        &mut self.regs
    }

    #[must_use]
    pub fn return_stack(&self) -> &ReturnStack {
        &self.stack
    }

    pub fn return_stack_mut(&mut self) -> &mut ReturnStack {
        &mut self.stack
    }

    #[must_use]
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Label bodies executed by the most recent run.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Run the demonstration program: seed the return stack with HALT and
    /// ENTRY, then enter the trampoline.
    pub fn boot(&mut self) -> Result<Outcome> {
        self.stack.reset();
        self.stack.push(Label::Halt)?;
        self.stack.push(Label::Entry)?;
        tracing::debug!("booting at {}", Label::Entry);
        self.run(Next::Return)
    }

    /// Call `target` from the host with whatever is already in the
    /// registers. The host's resume label is HALT, so a procedure that
    /// returns normally ends the run with [`Outcome::Returned`].
    pub fn invoke(&mut self, target: Label) -> Result<Outcome> {
        self.stack.reset();
        let next = self.call(target, Label::Halt)?;
        self.run(next)
    }

    /// Resume any pending work by popping the return stack, without
    /// resetting it first.
    pub fn resume(&mut self) -> Result<Outcome> {
        self.run(Next::Return)
    }

    /// Calling sequence: bump the depth, record where to resume, then jump
    /// to the callee.
    pub(crate) fn call(&mut self, target: Label, resume: Label) -> Result<Next> {
        self.stack.push(resume)?;
        tracing::debug!(
            depth = self.stack.depth(),
            "call {target}, resume at {resume}"
        );
        Ok(Next::Jump(target))
    }

    fn run(&mut self, mut next: Next) -> Result<Outcome> {
        self.steps = 0;
        loop {
            next = match next {
                Next::Jump(label) => self.step(label)?,
                Next::Return => {
                    let resume = self.trampoline()?;
                    self.step(resume)?
                }
                Next::Exit(code) => {
                    tracing::info!(code, steps = self.steps, "exit");
                    return Ok(Outcome::Exited(code));
                }
                Next::Halt => {
                    tracing::info!(steps = self.steps, "returned to host");
                    return Ok(Outcome::Returned);
                }
            };
        }
    }
}
