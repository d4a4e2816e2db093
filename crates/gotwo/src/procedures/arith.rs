use super::{A0, A1, A2, R0, checked_add};
use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Next, Reg};
use crate::Result;

// MUL: R0 = A0 * A1
const MUL_N: Reg = A0;
const MUL_M: Reg = A1;
const MUL_PRODUCT: Reg = R0;

// POWER: R0 = A0 ^ A1
// Base and exponent move out of A0/A1 because every MUL call consumes those.
const POWER_BASE_IN: Reg = A0;
const POWER_EXPONENT_IN: Reg = A1;
const POWER_BASE: Reg = A2;
const POWER_REMAINING: Reg = Reg::new(3);
const POWER_ACC: Reg = R0;

impl<C: Console> Machine<C> {
    pub(crate) fn mul(&mut self) -> Next {
        self.regs.set_r(MUL_PRODUCT, 0);
        Next::Jump(Label::MulLoop)
    }

    /// Add `n` once per remaining count. Counts down `A1` in place.
    pub(crate) fn mul_loop(&mut self) -> Result<Next> {
        let remaining = self.regs.a(MUL_M);
        if remaining <= 0 {
            return Ok(Next::Return);
        }
        let product = checked_add(self.regs.r(MUL_PRODUCT), self.regs.a(MUL_N), Label::Mul)?;
        self.regs.set_r(MUL_PRODUCT, product);
        self.regs.set_a(MUL_M, remaining - 1);
        Ok(Next::Jump(Label::MulLoop))
    }

    pub(crate) fn power(&mut self) -> Next {
        self.regs.set_a(POWER_BASE, self.regs.a(POWER_BASE_IN));
        self.regs.set_a(POWER_REMAINING, self.regs.a(POWER_EXPONENT_IN));
        self.regs.set_r(POWER_ACC, 1);
        Next::Jump(Label::PowerLoop)
    }

    /// Loop header and MUL resume point at once: the accumulator MUL just
    /// wrote into R0 is the next iteration's input.
    pub(crate) fn power_loop(&mut self) -> Result<Next> {
        let remaining = self.regs.a(POWER_REMAINING);
        if remaining <= 0 {
            return Ok(Next::Return);
        }
        self.regs.set_a(POWER_REMAINING, remaining - 1);
        self.regs.set_a(MUL_N, self.regs.r(POWER_ACC));
        self.regs.set_a(MUL_M, self.regs.a(POWER_BASE));
        self.call(Label::Mul, Label::PowerLoop)
    }
}

#[cfg(test)]
mod tests {
    use crate::label::Label;
    use crate::machine::Outcome;
    use crate::test_harness::invoke;

    #[test]
    fn test_mul() {
        let (machine, outcome) = invoke(Label::Mul, &[7, 6]).unwrap();
        assert_eq!(outcome, Outcome::Returned);
        assert_eq!(machine.registers().returns()[0], 42);
        // The multiplier is consumed.
        assert_eq!(machine.registers().args()[1], 0);
    }

    #[test]
    fn test_mul_by_zero() {
        let (machine, _) = invoke(Label::Mul, &[123, 0]).unwrap();
        assert_eq!(machine.registers().returns()[0], 0);
        let (machine, _) = invoke(Label::Mul, &[0, 123]).unwrap();
        assert_eq!(machine.registers().returns()[0], 0);
    }

    #[test]
    fn test_mul_negative_multiplicand() {
        let (machine, _) = invoke(Label::Mul, &[-3, 4]).unwrap();
        assert_eq!(machine.registers().returns()[0], -12);
    }

    #[test]
    fn test_mul_overflow_is_fatal() {
        let err = invoke(Label::Mul, &[i64::MAX, 2]).unwrap_err();
        assert!(matches!(err, crate::Error::Overflow(Label::Mul)), "got {err}");
    }

    #[test]
    fn test_power() {
        let (machine, outcome) = invoke(Label::Power, &[2, 10]).unwrap();
        assert_eq!(outcome, Outcome::Returned);
        assert_eq!(machine.registers().returns()[0], 1024);
        // The host frame sits at depth 0 and every MUL runs at depth 1.
        assert_eq!(machine.return_stack().max_depth(), 1);
        assert_eq!(machine.return_stack().depth(), -1);
    }

    #[test]
    fn test_power_zero_exponent() {
        let (machine, _) = invoke(Label::Power, &[0, 0]).unwrap();
        assert_eq!(machine.registers().returns()[0], 1);
        let (machine, _) = invoke(Label::Power, &[9, 0]).unwrap();
        assert_eq!(machine.registers().returns()[0], 1);
    }

    #[test]
    fn test_power_of_zero() {
        let (machine, _) = invoke(Label::Power, &[0, 5]).unwrap();
        assert_eq!(machine.registers().returns()[0], 0);
    }
}
