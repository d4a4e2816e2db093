use crate::abi::{EMPTY_DEPTH, RETURN_STACK_CAPACITY};
use crate::label::Label;
use crate::{Error, Result};

/// The return-address stack: resume label codes plus the depth counter `D`.
///
/// Slots above the depth keep whatever was last written there.
#[derive(Debug, Clone)]
pub struct ReturnStack {
    slots: [i32; RETURN_STACK_CAPACITY],
    depth: isize,
    max_depth: isize,
}

impl ReturnStack {
    pub const fn new() -> Self {
        Self {
            slots: [0; RETURN_STACK_CAPACITY],
            depth: EMPTY_DEPTH,
            max_depth: EMPTY_DEPTH,
        }
    }

    pub fn push(&mut self, resume: Label) -> Result<()> {
        self.push_code(resume.code())
    }

    /// Push a raw code. The trampoline decodes it only when it is popped.
    pub fn push_code(&mut self, code: i32) -> Result<()> {
        let depth = self.depth + 1;
        let slot = usize::try_from(depth).map_err(|_| Error::ReturnStackUnderflow)?;
        if slot >= RETURN_STACK_CAPACITY {
            return Err(Error::ReturnStackOverflow {
                capacity: RETURN_STACK_CAPACITY,
            });
        }
        self.slots[slot] = code;
        self.depth = depth;
        if self.depth > self.max_depth {
            self.max_depth = self.depth;
        }
        Ok(())
    }

    pub fn pop(&mut self) -> Result<i32> {
        let slot = usize::try_from(self.depth).map_err(|_| Error::ReturnStackUnderflow)?;
        self.depth -= 1;
        Ok(self.slots[slot])
    }

    #[must_use]
    pub fn peek(&self) -> Option<i32> {
        usize::try_from(self.depth).ok().map(|slot| self.slots[slot])
    }

    #[must_use]
    pub const fn depth(&self) -> isize {
        self.depth
    }

    /// Deepest depth reached since the last [`ReturnStack::reset`].
    #[must_use]
    pub const fn max_depth(&self) -> isize {
        self.max_depth
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.depth < 0
    }

    pub fn reset(&mut self) {
        self.depth = EMPTY_DEPTH;
        self.max_depth = EMPTY_DEPTH;
    }
}

impl Default for ReturnStack {
    fn default() -> Self {
        Self::new()
    }
}
