use crate::err::*;
use crate::syscall::*;
use crate::types::*;

pub const STDOUT: Fd = Fd(1);
pub const STDERR: Fd = Fd(2);

pub use crate::syscall::PipeFlags;

/// File descriptor
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fd(c_int);

impl Fd {
    pub fn read(&self, buf: &mut [u8]) -> Result<usize, Errno> {
        unsafe { read(self.0, buf) }
    }

    /// A single write(2).  May transfer fewer than `buf.len()` bytes.
    pub fn write(&self, buf: &[u8]) -> Result<usize, Errno> {
        unsafe { write(self.0, buf) }
    }

    /// Write all of `buf`, resuming after short writes and retrying on `EINTR`.
    ///
    /// On failure, reports how much of `buf` reached the fd.
    pub fn write_all(&self, buf: &[u8]) -> Result<(), WriteError> {
        let mut written = 0;
        while let Some(rest) = buf.get(written..) {
            if rest.is_empty() {
                break;
            }
            match self.write(rest) {
                Ok(0) => {
                    return Err(WriteError {
                        written,
                        errno: Errno::EIO,
                    });
                }
                Ok(n) => written += n,
                Err(e) if e == Errno::EINTR => continue,
                Err(errno) => return Err(WriteError { written, errno }),
            }
        }
        Ok(())
    }

    pub fn close(self) -> Result<(), Errno> {
        unsafe { close(self.0) }
    }

    pub fn isatty(&self) -> bool {
        // If ioctl errors, it's not a terminal; otherwise, it is.
        let mut termios = [0u8; TERMIOS_SIZE];
        unsafe { ioctl_tcgets(self.0, &mut termios) }.is_ok()
    }

    pub fn from_raw(fd: c_int) -> Self {
        Self(fd)
    }

    pub fn as_raw(&self) -> c_int {
        self.0
    }

    /// Returns `(read_end, write_end)`
    pub fn new_pipe(flags: PipeFlags) -> Result<(Self, Self), Errno> {
        let mut fds: [c_int; 2] = [0, 0];
        unsafe { pipe2(&mut fds, flags)? };
        Ok((Self::from_raw(fds[0]), Self::from_raw(fds[1])))
    }
}

// Fds are not closed on drop.  STDOUT and STDERR are plain constants which are copied around
// freely, and closing them behind a caller's back would silently swallow all later output.
