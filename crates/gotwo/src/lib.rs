#![allow(
    clippy::cast_possible_truncation, // intentional: register words narrow to bytes and exit codes
    clippy::cast_possible_wrap, // intentional: buffer indices and lengths widen to register words
    clippy::cast_sign_loss, // intentional: non-negative register words index the I/O buffer
    clippy::missing_errors_doc // every fallible operation returns the one `Error` enum
)]

pub mod abi;
pub mod error;
pub mod host;
pub mod label;
pub mod machine;
mod procedures;
mod trampoline;

/// Test harness module for writing unit and integration tests.
///
/// This module is only available when running tests or when the
/// `test-harness` feature is enabled.
#[cfg(any(test, feature = "test-harness"))]
pub mod test_harness;

pub use error::{Error, Result};
pub use host::{Console, StdConsole};
pub use label::Label;
pub use machine::{Machine, MachineOptions, Outcome, Reg, RegisterFile, ReturnStack, Word};
