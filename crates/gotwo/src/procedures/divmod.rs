//! DIVMOD: `R0 = A0 / A1`, `R1 = A0 % A1`.
//!
//! The core procedure set only reserves the label. With the `divmod` feature
//! (on by default) it is implemented as an extension by repeated subtraction
//! over non-negative operands; without it the label returns immediately and
//! leaves the result registers untouched.

use super::{A0, A1, R0, R1, checked_add};
use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Next, Reg};
use crate::{Error, Result};

const DIVIDEND: Reg = A0;
const DIVISOR: Reg = A1;
const QUOTIENT: Reg = R0;
const REMAINDER: Reg = R1;

impl<C: Console> Machine<C> {
    pub(crate) fn divmod(&mut self) -> Result<Next> {
        if !cfg!(feature = "divmod") {
            return Ok(Next::Return);
        }
        let dividend = self.regs.a(DIVIDEND);
        let divisor = self.regs.a(DIVISOR);
        if divisor == 0 {
            return Err(Error::DivisionByZero);
        }
        if dividend < 0 || divisor < 0 {
            return Err(Error::NegativeOperand(Label::DivMod));
        }
        self.regs.set_r(QUOTIENT, 0);
        self.regs.set_r(REMAINDER, dividend);
        Ok(Next::Jump(Label::DivModLoop))
    }

    pub(crate) fn divmod_loop(&mut self) -> Result<Next> {
        let remainder = self.regs.r(REMAINDER);
        let divisor = self.regs.a(DIVISOR);
        if remainder < divisor {
            return Ok(Next::Return);
        }
        self.regs.set_r(REMAINDER, remainder - divisor);
        let quotient = checked_add(self.regs.r(QUOTIENT), 1, Label::DivMod)?;
        self.regs.set_r(QUOTIENT, quotient);
        Ok(Next::Jump(Label::DivModLoop))
    }
}

#[cfg(test)]
mod tests {
    use crate::label::Label;
    use crate::test_harness::invoke;

    #[cfg(feature = "divmod")]
    #[test]
    fn test_divmod() {
        let (machine, _) = invoke(Label::DivMod, &[47, 5]).unwrap();
        assert_eq!(&machine.registers().returns()[..2], &[9, 2]);

        let (machine, _) = invoke(Label::DivMod, &[3, 7]).unwrap();
        assert_eq!(&machine.registers().returns()[..2], &[0, 3]);
    }

    #[cfg(feature = "divmod")]
    #[test]
    fn test_divmod_rejects_bad_operands() {
        let err = invoke(Label::DivMod, &[1, 0]).unwrap_err();
        assert!(matches!(err, crate::Error::DivisionByZero), "got {err}");
        let err = invoke(Label::DivMod, &[-4, 2]).unwrap_err();
        assert!(
            matches!(err, crate::Error::NegativeOperand(Label::DivMod)),
            "got {err}"
        );
    }

    #[cfg(not(feature = "divmod"))]
    #[test]
    fn test_divmod_stub_returns_immediately() {
        let (machine, outcome) = invoke(Label::DivMod, &[47, 5]).unwrap();
        assert_eq!(outcome, crate::machine::Outcome::Returned);
        assert_eq!(&machine.registers().returns()[..2], &[0, 0]);
        assert_eq!(machine.steps(), 2);
    }
}
