//! Procedures built on the calling convention.
//!
//! Each label is a method on [`Machine`](crate::machine::Machine) that reads
//! and writes registers and returns the next transition. Register roles are
//! `const` aliases local to each procedure; aliases in different procedures
//! may name the same slot, so a caller must not keep live values in any
//! register its callee uses.

mod arith;
mod atoi;
mod console;
mod divmod;
mod entry;
mod fib;

use crate::label::Label;
use crate::machine::{Reg, Word};
use crate::{Error, Result};

const A0: Reg = Reg::new(0);
const A1: Reg = Reg::new(1);
const A2: Reg = Reg::new(2);
const R0: Reg = Reg::new(0);
const R1: Reg = Reg::new(1);
const R2: Reg = Reg::new(2);

fn checked_add(lhs: Word, rhs: Word, label: Label) -> Result<Word> {
    lhs.checked_add(rhs).ok_or(Error::Overflow(label))
}

fn checked_sub(lhs: Word, rhs: Word, label: Label) -> Result<Word> {
    lhs.checked_sub(rhs).ok_or(Error::Overflow(label))
}
