use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

/// pipe2(2) flags
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipeFlags(c_int);

impl PipeFlags {
    pub const O_CLOEXEC: Self = Self(0o2000000);
    pub const O_NONBLOCK: Self = Self(0o0004000);

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> c_int {
        self.0
    }
}

impl core::ops::BitOr for PipeFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

// `man 2 pipe2`:
//
// SYNOPSIS
//
//        int pipe2(int pipefd[2], int flags);
//
// RETURN VALUE
//        On success, zero is returned.  On error, -1 is returned, errno is set to indicate the
//        error, and pipefd is left unchanged.
pub unsafe fn pipe2(pipefd: &mut [c_int; 2], flags: PipeFlags) -> Result<(), Errno> {
    syscall!(Sysno::pipe2, pipefd.as_mut_ptr(), flags.bits()).map(|_| ())
}
