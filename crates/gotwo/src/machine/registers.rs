use crate::abi::REGISTER_COUNT;
use crate::{Error, Result};

/// Contents of a single register.
pub type Word = i64;

/// Index into one of the register files.
///
/// Procedures name their registers with `const` aliases built by [`Reg::new`],
/// which rejects out-of-range indices at compile time. Indices computed from
/// register contents go through [`Reg::from_word`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reg(u8);

impl Reg {
    #[must_use]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < REGISTER_COUNT, "register index out of range");
        Self(index)
    }

    pub fn from_word(word: Word) -> Result<Self> {
        match u8::try_from(word) {
            Ok(index) if (index as usize) < REGISTER_COUNT => Ok(Self(index)),
            _ => Err(Error::RegisterOutOfRange(word)),
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// The argument (`A`) and return-value (`R`) register files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterFile {
    a: [Word; REGISTER_COUNT],
    r: [Word; REGISTER_COUNT],
}

impl RegisterFile {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            a: [0; REGISTER_COUNT],
            r: [0; REGISTER_COUNT],
        }
    }

    #[must_use]
    pub const fn a(&self, reg: Reg) -> Word {
        self.a[reg.index()]
    }

    pub const fn set_a(&mut self, reg: Reg, value: Word) {
        self.a[reg.index()] = value;
    }

    #[must_use]
    pub const fn r(&self, reg: Reg) -> Word {
        self.r[reg.index()]
    }

    pub const fn set_r(&mut self, reg: Reg, value: Word) {
        self.r[reg.index()] = value;
    }

    #[must_use]
    pub const fn args(&self) -> &[Word; REGISTER_COUNT] {
        &self.a
    }

    #[must_use]
    pub const fn returns(&self) -> &[Word; REGISTER_COUNT] {
        &self.r
    }

    /// Zero `A`, then copy `words` into its prefix.
    pub fn load_args(&mut self, words: &[Word]) -> Result<()> {
        if words.len() > REGISTER_COUNT {
            return Err(Error::RegisterOutOfRange(words.len() as Word));
        }
        self.a = [0; REGISTER_COUNT];
        self.a[..words.len()].copy_from_slice(words);
        Ok(())
    }

    /// Zero `A`, then store one byte per register. A string shorter than the
    /// register file is thereby zero-terminated.
    pub fn load_arg_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.len() > REGISTER_COUNT {
            return Err(Error::RegisterOutOfRange(bytes.len() as Word));
        }
        self.a = [0; REGISTER_COUNT];
        for (slot, &byte) in self.a.iter_mut().zip(bytes) {
            *slot = Word::from(byte);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reg_from_word_bounds() {
        assert_eq!(Reg::from_word(0).unwrap().index(), 0);
        assert_eq!(Reg::from_word(15).unwrap().index(), 15);
        assert!(matches!(
            Reg::from_word(16),
            Err(Error::RegisterOutOfRange(16))
        ));
        assert!(matches!(
            Reg::from_word(-1),
            Err(Error::RegisterOutOfRange(-1))
        ));
    }

    #[test]
    fn test_files_are_independent() {
        let mut regs = RegisterFile::new();
        let reg = Reg::new(3);
        regs.set_a(reg, 7);
        regs.set_r(reg, 9);
        assert_eq!(regs.a(reg), 7);
        assert_eq!(regs.r(reg), 9);
    }

    #[test]
    fn test_load_args_zero_fills() {
        let mut regs = RegisterFile::new();
        regs.load_args(&[1; REGISTER_COUNT]).unwrap();
        regs.load_args(&[5, 6]).unwrap();
        assert_eq!(&regs.args()[..3], &[5, 6, 0]);
        assert!(regs.args()[2..].iter().all(|&w| w == 0));
    }

    #[test]
    fn test_load_arg_bytes() {
        let mut regs = RegisterFile::new();
        regs.load_arg_bytes(b"hi").unwrap();
        assert_eq!(&regs.args()[..3], &[104, 105, 0]);
        assert!(regs.load_arg_bytes(&[b'x'; 17]).is_err());
    }
}
