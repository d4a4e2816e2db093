//! The console behind the PRINT and SCAN system calls.

use std::io::{self, Read, Write};

/// Byte-level console used by the host shims. Each PRINT or SCAN makes
/// exactly one call.
pub trait Console {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize>;
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;
}

/// The process's standard input and output.
#[derive(Debug)]
pub struct StdConsole {
    stdin: io::Stdin,
    stdout: io::Stdout,
}

impl StdConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            stdin: io::stdin(),
            stdout: io::stdout(),
        }
    }
}

impl Default for StdConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for StdConsole {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        let mut out = self.stdout.lock();
        let written = out.write(bytes)?;
        out.flush()?;
        Ok(written)
    }

    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.stdin.lock().read(buf)
    }
}
