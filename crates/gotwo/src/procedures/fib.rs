use super::{A0, A1, A2, R0, R1, checked_add, checked_sub};
use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Next, Reg};
use crate::Result;

const N: Reg = A0;
const CURRENT: Reg = A1;
const PREVIOUS: Reg = A2;
const RESULT: Reg = R0;
// No parallel assignment, so the swap goes through a scratch register.
const SWAP: Reg = R1;

impl<C: Console> Machine<C> {
    pub(crate) const fn fib() -> Next {
        Next::Jump(Label::FibLoop)
    }

    /// Apply `(cur, prev) -> (cur + prev, cur)` until `n` reaches zero.
    pub(crate) fn fib_loop(&mut self) -> Result<Next> {
        let n = self.regs.a(N);
        if n <= 0 {
            self.regs.set_r(RESULT, self.regs.a(CURRENT));
            return Ok(Next::Return);
        }
        self.regs.set_r(SWAP, self.regs.a(CURRENT));
        let next = checked_add(self.regs.a(CURRENT), self.regs.a(PREVIOUS), Label::Fib)?;
        self.regs.set_a(CURRENT, next);
        self.regs.set_a(PREVIOUS, self.regs.r(SWAP));
        self.regs.set_a(N, checked_sub(n, 1, Label::Fib)?);
        Ok(Next::Jump(Label::FibLoop))
    }
}
