//! EXIT, PRINT and SCAN: the only labels that reach the host.

use super::{A0, R0, R1};
use crate::abi::{ASCII_MASK, IO_BUFFER_SIZE};
use crate::host::Console;
use crate::machine::{Machine, Next, Reg, Word};
use crate::Result;

const EXIT_CODE: Reg = A0;

// PRINT has nothing to return until the write is done, so it counts in R1.
const PRINT_INDEX: Reg = R1;
const PRINT_WRITTEN: Reg = R0;

impl<C: Console> Machine<C> {
    pub(crate) fn exit(&self) -> Next {
        // The host keeps only the low bits of an exit status anyway.
        Next::Exit(self.regs.a(EXIT_CODE) as i32)
    }

    /// Stage up to 16 masked bytes from `A`, stopping before the first zero,
    /// then hand them to the console in a single write.
    pub(crate) fn print(&mut self) -> Result<Next> {
        self.io = [0; IO_BUFFER_SIZE];
        self.regs.set_r(PRINT_INDEX, 0);
        loop {
            let index = self.regs.r(PRINT_INDEX);
            if index >= IO_BUFFER_SIZE as Word {
                break;
            }
            let byte = self.regs.a(Reg::from_word(index)?);
            if byte == 0 {
                break;
            }
            self.io[index as usize] = (byte as u8) & ASCII_MASK;
            self.regs.set_r(PRINT_INDEX, index + 1);
        }

        let len = self.regs.r(PRINT_INDEX) as usize;
        let written = self.console.write(&self.io[..len])?;
        tracing::debug!(len, written, "PRINT");
        self.regs.set_r(PRINT_WRITTEN, written as Word);
        Ok(Next::Return)
    }

    /// One console read into the cleared buffer; every buffer byte lands in
    /// `R`, so a short read leaves the tail zeroed.
    pub(crate) fn scan(&mut self) -> Result<Next> {
        self.io = [0; IO_BUFFER_SIZE];
        let read = self.console.read(&mut self.io)?;
        tracing::debug!(read, "SCAN");
        for (index, &byte) in self.io.iter().enumerate() {
            self.regs
                .set_r(Reg::from_word(index as Word)?, Word::from(byte));
        }
        Ok(Next::Return)
    }
}
