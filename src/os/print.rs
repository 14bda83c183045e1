//! Print framework

use crate::os::{Fd, STDERR, STDOUT};
use crate::types::{CStr, c_char, c_int};
use crate::ws::print_ws_fd;
use core::sync::atomic::{AtomicU8, Ordering};

// ANSI color codes
const RESET: &[u8] = b"\x1b[0m";
const RED: &[u8] = b"\x1b[31m";

/// Color options for diagnostics
#[derive(Clone, Copy)]
pub enum Color {
    Error,
}

impl Color {
    const fn code(self) -> &'static [u8] {
        match self {
            Color::Error => RED,
        }
    }
}

// Cached colorization state
// 0 = uninitialized
// 1 = no colors
// 2 = colors enabled (TTY)
const COLOR_UNINITIALIZED: u8 = 0;
const COLOR_DISABLED: u8 = 1;
const COLOR_ENABLED: u8 = 2;

static SHOULD_COLORIZE: AtomicU8 = AtomicU8::new(COLOR_UNINITIALIZED);

/// Check if colors should be used for diagnostics
///
/// Returns true if STDERR is a TTY.  Result is cached after the first call.
fn should_colorize() -> bool {
    match SHOULD_COLORIZE.load(Ordering::Relaxed) {
        COLOR_ENABLED => true,
        COLOR_DISABLED => false,
        _ => {
            let is_tty = STDERR.isatty();
            SHOULD_COLORIZE.store(
                if is_tty {
                    COLOR_ENABLED
                } else {
                    COLOR_DISABLED
                },
                Ordering::Relaxed,
            );
            is_tty
        }
    }
}

pub fn print<T: Print>(s: T) {
    s.print(&STDOUT);
}

pub fn println<T: Print>(s: T) {
    s.print(&STDOUT);
    b"\n".print(&STDOUT);
}

pub fn eprint<T: Print>(s: T) {
    s.print(&STDERR);
}

pub fn eprintln<T: Print>(s: T) {
    s.print(&STDERR);
    b"\n".print(&STDERR);
}

pub fn eprint_color<T: Print>(color: Color, s: T) {
    if should_colorize() {
        color.code().print(&STDERR);
        s.print(&STDERR);
        RESET.print(&STDERR);
    } else {
        s.print(&STDERR);
    }
}

/// Something which can be written to an fd without `core::fmt`
///
/// Write errors are dropped, as with `print_ws`.
pub trait Print {
    fn print(&self, fd: &Fd);
    fn print_len(&self) -> usize;

    /// Print as many spaces as needed to pad this value out to `width` columns.
    ///
    /// Returns the number of spaces printed.
    fn print_padding(&self, fd: &Fd, width: usize) -> usize {
        let pad = width.saturating_sub(self.print_len());
        let pad = c_int::try_from(pad).unwrap_or(c_int::MAX);
        print_ws_fd(fd, pad, b' ' as c_char) as usize
    }
}

impl Print for &[u8] {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(self);
    }

    fn print_len(&self) -> usize {
        self.len()
    }
}

impl<const N: usize> Print for [u8; N] {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(self);
    }

    fn print_len(&self) -> usize {
        N
    }
}

impl<const N: usize> Print for &[u8; N] {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(*self);
    }

    fn print_len(&self) -> usize {
        N
    }
}

impl Print for &str {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(self.as_bytes());
    }

    fn print_len(&self) -> usize {
        self.len()
    }
}

impl Print for &CStr {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(self.to_bytes());
    }

    fn print_len(&self) -> usize {
        self.to_bytes().len()
    }
}

impl Print for c_int {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(itoa::Buffer::new().format(*self).as_bytes());
    }

    fn print_len(&self) -> usize {
        itoa::Buffer::new().format(*self).len()
    }
}

impl Print for usize {
    fn print(&self, fd: &Fd) {
        let _ = fd.write_all(itoa::Buffer::new().format(*self).as_bytes());
    }

    fn print_len(&self) -> usize {
        itoa::Buffer::new().format(*self).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::PipeFlags;

    fn drain(rd: &Fd) -> Vec<u8> {
        let mut out = Vec::new();
        let mut buf = [0u8; 256];
        loop {
            match rd.read(&mut buf) {
                Ok(0) => return out,
                Ok(n) => out.extend_from_slice(&buf[..n]),
                Err(e) => panic!("read failed: {e:?}"),
            }
        }
    }

    #[test]
    fn test_print_len() {
        assert_eq!("abc".print_len(), 3);
        assert_eq!(b"abcd".print_len(), 4);
        assert_eq!(c"ab".print_len(), 2);
        assert_eq!((-12 as c_int).print_len(), 3);
        assert_eq!(1000usize.print_len(), 4);
    }

    #[test]
    fn test_print_padding() {
        let (rd, wr) = Fd::new_pipe(PipeFlags::O_CLOEXEC).unwrap();

        "ab".print(&wr);
        assert_eq!("ab".print_padding(&wr, 6), 4);
        42usize.print(&wr);
        assert_eq!(42usize.print_padding(&wr, 1), 0);
        wr.close().unwrap();

        assert_eq!(drain(&rd), b"ab    42");
        rd.close().unwrap();
    }

    #[test]
    fn test_print_integers() {
        let (rd, wr) = Fd::new_pipe(PipeFlags::O_CLOEXEC).unwrap();

        (-5 as c_int).print(&wr);
        b" ".print(&wr);
        7usize.print(&wr);
        wr.close().unwrap();

        assert_eq!(drain(&rd), b"-5 7");
        rd.close().unwrap();
    }
}
