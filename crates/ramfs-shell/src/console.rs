//! Byte-oriented console I/O and line editing.

use std::io::{self, ErrorKind, Read, Write};

/// Size of the command line buffer, terminator included.
///
/// [`read_line`] accepts at most `MAX_COMMAND_LEN - 1` bytes per line.
pub const MAX_COMMAND_LEN: usize = 256;

const BACKSPACE: u8 = 8;
const DELETE: u8 = 127;
const ERASE: &[u8] = b"\x08 \x08";

/// A blocking, byte-at-a-time terminal.
pub trait Console {
    /// Next input byte, or `None` at end of input.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Write `bytes` in full.
    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()>;

    /// Push buffered output to the terminal.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Write a UTF-8 string.
    fn write_str(&mut self, s: &str) -> io::Result<()> {
        self.write_bytes(s.as_bytes())
    }
}

/// [`Console`] over any reader and writer, such as stdin and stdout.
#[derive(Debug)]
pub struct StdConsole<R, W> {
    input: R,
    output: W,
}

impl<R: Read, W: Write> StdConsole<R, W> {
    /// Wrap `input` and `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Consume the console, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: Read, W: Write> Console for StdConsole<R, W> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.input.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.output.write_all(bytes)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.output.flush()
    }
}

/// Read one line from `console`.
///
/// The line ends at `\n` or `\r` (not included), or once
/// `MAX_COMMAND_LEN - 1` bytes have been buffered; any excess input stays
/// unread for the next call. Backspace (8) and DEL (127) erase the last
/// buffered byte. With `echo` set, accepted bytes, erasures and the line
/// end are written back to the console.
///
/// Returns `None` when input ends before any byte was buffered. Invalid
/// UTF-8 is replaced, not rejected.
pub fn read_line<C: Console + ?Sized>(console: &mut C, echo: bool) -> io::Result<Option<String>> {
    let mut line = Vec::with_capacity(MAX_COMMAND_LEN);
    while line.len() < MAX_COMMAND_LEN - 1 {
        let Some(byte) = console.read_byte()? else {
            if line.is_empty() {
                return Ok(None);
            }
            break;
        };
        match byte {
            BACKSPACE | DELETE => {
                if line.pop().is_some() && echo {
                    console.write_bytes(ERASE)?;
                }
            }
            b'\n' | b'\r' => {
                if echo {
                    console.write_bytes(b"\n")?;
                }
                break;
            }
            _ => {
                line.push(byte);
                if echo {
                    console.write_bytes(&[byte])?;
                }
            }
        }
    }
    Ok(Some(String::from_utf8_lossy(&line).into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn console(input: &[u8]) -> StdConsole<&[u8], Vec<u8>> {
        StdConsole::new(input, Vec::new())
    }

    #[test]
    fn reads_until_newline() {
        let mut c = console(b"ls\ncat a\n");
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("ls"));
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("cat a"));
        assert_eq!(read_line(&mut c, false).unwrap(), None);
    }

    #[test]
    fn carriage_return_ends_line() {
        let mut c = console(b"help\r");
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("help"));
    }

    #[test]
    fn crlf_yields_trailing_empty_line() {
        let mut c = console(b"ls\r\n");
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("ls"));
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some(""));
        assert_eq!(read_line(&mut c, false).unwrap(), None);
    }

    #[test]
    fn partial_line_at_eof_is_returned() {
        let mut c = console(b"echo hi");
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("echo hi"));
        assert_eq!(read_line(&mut c, false).unwrap(), None);
    }

    #[test]
    fn backspace_erases_last_byte() {
        let mut c = console(b"lsx\x08\n");
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("ls"));

        let mut c = console(b"lsx\x7f\n");
        assert_eq!(read_line(&mut c, false).unwrap().as_deref(), Some("ls"));
    }

    #[test]
    fn backspace_on_empty_line_is_ignored() {
        let mut c = console(b"\x08\x08ok\n");
        assert_eq!(read_line(&mut c, true).unwrap().as_deref(), Some("ok"));
        assert_eq!(c.output(), b"ok\n");
    }

    #[test]
    fn echo_mirrors_input_and_erasures() {
        let mut c = console(b"ab\x08c\n");
        assert_eq!(read_line(&mut c, true).unwrap().as_deref(), Some("ac"));
        assert_eq!(c.into_output(), b"ab\x08 \x08c\n");
    }

    #[test]
    fn no_echo_writes_nothing() {
        let mut c = console(b"ab\x08c\n");
        read_line(&mut c, false).unwrap();
        assert!(c.output().is_empty());
    }

    #[test]
    fn long_input_is_split_at_buffer_limit() {
        let mut input = vec![b'a'; 300];
        input.push(b'\n');
        let mut c = StdConsole::new(&input[..], Vec::new());
        let first = read_line(&mut c, false).unwrap().unwrap();
        assert_eq!(first.len(), MAX_COMMAND_LEN - 1);
        let rest = read_line(&mut c, false).unwrap().unwrap();
        assert_eq!(rest.len(), 300 - (MAX_COMMAND_LEN - 1));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let mut c = console(b"a\xffb\n");
        assert_eq!(
            read_line(&mut c, false).unwrap().as_deref(),
            Some("a\u{fffd}b")
        );
    }
}
