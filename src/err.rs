//! # Error handling
//!
//! System call wrappers return `Result<_, Errno>`.  The print routines come in two flavors:
//!
//! - `print_ws` and friends drop write errors and report the requested count, which is what
//!   existing callers of the C routine expect.
//! - `try_print_ws` and friends surface the first failing write as a `WriteError`.
//!
//! Unrecoverable scenarios only exist in the `print_ws` binary, which displays a message and
//! exits.  Our print machinery does not support typical Rust `{}`-formatting, so multi-field
//! messages are assembled from individual `eprint` calls.

use crate::os::*;

pub type Errno = syscalls::Errno;

/// A write to the output fd failed part way through a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WriteError {
    /// Bytes which reached the fd before the failure
    pub written: usize,
    pub errno: Errno,
}

impl Print for WriteError {
    fn print(&self, fd: &Fd) {
        b"write failed after ".print(fd);
        self.written.print(fd);
        b" bytes".print(fd);
        if let Some(e) = self.errno.description() {
            b": ".print(fd);
            e.print(fd);
        }
    }

    fn print_len(&self) -> usize {
        let desc = match self.errno.description() {
            Some(e) => ": ".len() + e.len(),
            None => 0,
        };
        "write failed after ".len() + self.written.print_len() + " bytes".len() + desc
    }
}

fn abort() -> ! {
    exit(1)
}

pub fn abort_with_msg(msg: &str) -> ! {
    eprint_color(Color::Error, "ERROR: ");
    eprint(msg);
    eprint("\n");

    abort()
}

/// Report a failed run as `ERROR: write failed after N bytes: <errno>` and exit
pub fn abort_write_error(e: WriteError) -> ! {
    eprint_color(Color::Error, "ERROR: ");
    eprint(e);
    eprint("\n");

    abort()
}

pub trait OrAbortResult<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortResult<T> for Result<T, Errno> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        let e = match self {
            Ok(t) => return t,
            Err(e) => e,
        };

        eprint_color(Color::Error, "ERROR: ");
        eprint(msg);
        if let Some(e) = e.description() {
            eprint(": ");
            eprint(e);
        }
        eprint("\n");

        abort();
    }
}

pub trait OrAbortOption<T> {
    fn or_abort<M: Print>(self, msg: M) -> T;
}

impl<T> OrAbortOption<T> for Option<T> {
    fn or_abort<M: Print>(self, msg: M) -> T {
        if let Some(t) = self {
            return t;
        };

        eprint_color(Color::Error, "ERROR: ");
        eprint(msg);
        eprint("\n");

        abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_error_message() {
        let (rd, wr) = Fd::new_pipe(PipeFlags::O_CLOEXEC).unwrap();
        let e = WriteError {
            written: 3,
            errno: Errno::EBADF,
        };
        e.print(&wr);
        wr.close().unwrap();

        let expected = format!(
            "write failed after 3 bytes: {}",
            Errno::EBADF.description().unwrap()
        );
        let mut buf = [0u8; 256];
        let n = rd.read(&mut buf).unwrap();
        assert_eq!(&buf[..n], expected.as_bytes());
        assert_eq!(e.print_len(), expected.len());
        rd.close().unwrap();
    }
}
