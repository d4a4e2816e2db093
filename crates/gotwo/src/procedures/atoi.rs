use super::{A0, A1, R0, R1, R2, checked_add};
use crate::abi::{ATOI_EMPTY, ATOI_INVALID, ATOI_OK, REGISTER_COUNT};
use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Next, Reg, Word};
use crate::Result;

// Digits arrive in A0..A15. MUL consumes A0/A1, so digit i is always copied
// out before the MUL that follows it, and step 0 skips MUL entirely (the
// total is still zero) to keep A1 intact until step 1 reads it.
const FIRST_BYTE: Reg = A0;
const MUL_N: Reg = A0;
const MUL_M: Reg = A1;
const TOTAL: Reg = R0;
const ERROR: Reg = R1;
const POSITION: Reg = R2;
const DIGIT: Reg = Reg::new(3);
const INDEX: Reg = Reg::new(4);

const RADIX: Word = 10;

impl<C: Console> Machine<C> {
    pub(crate) fn atoi(&mut self) -> Next {
        self.regs.set_r(TOTAL, 0);
        if self.regs.a(FIRST_BYTE) == 0 {
            self.regs.set_r(ERROR, ATOI_EMPTY);
            self.regs.set_r(POSITION, 0);
            return Next::Return;
        }
        self.regs.set_r(INDEX, 0);
        Next::Jump(Label::AtoiLoop)
    }

    pub(crate) fn atoi_loop(&mut self) -> Result<Next> {
        let index = self.regs.r(INDEX);
        if index >= REGISTER_COUNT as Word {
            return Ok(self.atoi_done());
        }
        let byte = self.regs.a(Reg::from_word(index)?);
        if byte == 0 {
            return Ok(self.atoi_done());
        }
        if !(Word::from(b'0')..=Word::from(b'9')).contains(&byte) {
            tracing::debug!(index, byte, "ATOI rejected byte");
            self.regs.set_r(TOTAL, 0);
            self.regs.set_r(ERROR, ATOI_INVALID);
            self.regs.set_r(POSITION, index);
            return Ok(Next::Return);
        }
        self.regs.set_r(DIGIT, byte - Word::from(b'0'));
        if index == 0 {
            return Ok(Next::Jump(Label::AtoiAccumulate));
        }
        self.regs.set_a(MUL_N, self.regs.r(TOTAL));
        self.regs.set_a(MUL_M, RADIX);
        self.call(Label::Mul, Label::AtoiAccumulate)
    }

    /// MUL resume point: `R0` now holds `total * 10`.
    pub(crate) fn atoi_accumulate(&mut self) -> Result<Next> {
        let total = checked_add(self.regs.r(TOTAL), self.regs.r(DIGIT), Label::Atoi)?;
        self.regs.set_r(TOTAL, total);
        self.regs.set_r(INDEX, self.regs.r(INDEX) + 1);
        Ok(Next::Jump(Label::AtoiLoop))
    }

    fn atoi_done(&mut self) -> Next {
        self.regs.set_r(ERROR, ATOI_OK);
        self.regs.set_r(POSITION, 0);
        Next::Return
    }
}
