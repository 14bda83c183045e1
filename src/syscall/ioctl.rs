use crate::err::*;
use crate::types::c_int;
use syscalls::{Sysno, syscall};

#[cfg(not(any(
    all(target_os = "linux", target_arch = "aarch64"),
    all(target_os = "linux", target_arch = "x86_64"),
)))]
compile_error!("src/syscall/ioctl.rs only supports Linux x86_64 and Linux AArch64.");

/// ioctl request codes
///
/// Only the terminal query used to decide whether diagnostics get colored.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C)]
pub enum IoctlRequest {
    #[cfg(all(target_os = "linux", target_arch = "x86_64"))]
    TCGETS = 0x5401,
    #[cfg(all(target_os = "linux", target_arch = "aarch64"))]
    TCGETS = 0x5401,
}

/// Large enough for `struct termios` on every supported ISA
pub const TERMIOS_SIZE: usize = 64;

// `man 2 ioctl`:
//
// SYNOPSIS
//        int ioctl(int fd, unsigned long op, ...);
//
// RETURN VALUE
//        Usually, on success zero is returned.  A few ioctl() operations use the return value as
//        an output parameter and return a nonnegative value on success.  On error, -1 is returned,
//        and errno is set to indicate the error.
pub unsafe fn ioctl_tcgets(fd: c_int, termios: &mut [u8; TERMIOS_SIZE]) -> Result<c_int, Errno> {
    syscall!(
        Sysno::ioctl,
        fd,
        IoctlRequest::TCGETS as c_int,
        termios.as_mut_ptr()
    )
    .map(|ret| ret as c_int)
}
