use crate::types::c_int;

/// Terminate the process with `status`.  Pending output is not flushed; there is no buffering to
/// flush.
#[inline]
pub fn exit(status: c_int) -> ! {
    unsafe { crate::syscall::exit_group(status) }
}
