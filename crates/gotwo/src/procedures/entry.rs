//! The program `gotwo run` boots into: prompt for `n`, parse it, and exit
//! with the `n`th Fibonacci number as the status code.

use super::{A0, A1, A2, R0, R1};
use crate::abi::{ATOI_OK, REGISTER_COUNT};
use crate::host::Console;
use crate::label::Label;
use crate::machine::{Machine, Next, Reg, Word};
use crate::Result;

const PROMPT: &[u8] = b"n? ";
const REJECTED: &[u8] = b"bad input\n";

const ATOI_VALUE: Reg = R0;
const ATOI_ERROR: Reg = R1;
const FIB_N: Reg = A0;
const FIB_CURRENT: Reg = A1;
const FIB_PREVIOUS: Reg = A2;
const FIB_RESULT: Reg = R0;
const EXIT_CODE: Reg = A0;

impl<C: Console> Machine<C> {
    pub(crate) fn entry(&mut self) -> Result<Next> {
        self.regs.load_arg_bytes(PROMPT)?;
        self.call(Label::Print, Label::EntryPrompted)
    }

    pub(crate) fn entry_prompted(&mut self) -> Result<Next> {
        self.call(Label::Scan, Label::EntryScanned)
    }

    /// Move the scanned line into `A` for ATOI, terminating it at the line
    /// ending.
    pub(crate) fn entry_scanned(&mut self) -> Result<Next> {
        for index in 0..REGISTER_COUNT {
            let reg = Reg::from_word(index as Word)?;
            let byte = self.regs.r(reg);
            let byte = if byte == Word::from(b'\n') || byte == Word::from(b'\r') {
                0
            } else {
                byte
            };
            self.regs.set_a(reg, byte);
        }
        self.call(Label::Atoi, Label::EntryParsed)
    }

    pub(crate) fn entry_parsed(&mut self) -> Result<Next> {
        if self.regs.r(ATOI_ERROR) != ATOI_OK {
            self.regs.load_arg_bytes(REJECTED)?;
            return self.call(Label::Print, Label::EntryRejected);
        }
        self.regs.set_a(FIB_N, self.regs.r(ATOI_VALUE));
        self.regs.set_a(FIB_CURRENT, 1);
        self.regs.set_a(FIB_PREVIOUS, 0);
        self.call(Label::Fib, Label::EntryDone)
    }

    pub(crate) fn entry_rejected(&mut self) -> Next {
        self.regs.set_a(EXIT_CODE, 1);
        Next::Jump(Label::Exit)
    }

    pub(crate) fn entry_done(&mut self) -> Next {
        self.regs.set_a(EXIT_CODE, self.regs.r(FIB_RESULT));
        Next::Jump(Label::Exit)
    }
}

#[cfg(test)]
mod tests {
    use crate::machine::Outcome;
    use crate::test_harness::boot_with_input;

    #[test]
    fn test_entry_exits_with_fibonacci() {
        let (machine, outcome) = boot_with_input(b"10\n").unwrap();
        assert_eq!(outcome, Outcome::Exited(89));
        assert_eq!(machine.console().output(), b"n? ");
    }

    #[test]
    fn test_entry_rejects_garbage() {
        let (machine, outcome) = boot_with_input(b"ten\n").unwrap();
        assert_eq!(outcome, Outcome::Exited(1));
        assert_eq!(machine.console().output(), b"n? bad input\n");
    }

    #[test]
    fn test_entry_rejects_empty_line() {
        let (_, outcome) = boot_with_input(b"\n").unwrap();
        assert_eq!(outcome, Outcome::Exited(1));
    }

    #[test]
    fn test_entry_accepts_crlf() {
        let (_, outcome) = boot_with_input(b"4\r\n").unwrap();
        assert_eq!(outcome, Outcome::Exited(5));
    }

    #[test]
    fn test_entry_leaves_halt_frame() {
        // EXIT never returns, so the HALT sentinel is still on the stack.
        let (machine, _) = boot_with_input(b"3\n").unwrap();
        assert_eq!(machine.return_stack().depth(), 0);
        assert_eq!(machine.return_stack().max_depth(), 1);
    }
}
