//! Raw Linux system calls.
//!
//! Each wrapper mirrors its `man 2` page and returns the kernel's result as `Result<_, Errno>`.
//! They are `unsafe` because the kernel trusts whatever file descriptors and pointers we hand it;
//! `crate::os` provides the safe surface.

mod close;
mod exit;
mod ioctl;
mod pipe;
mod read;
mod write;

pub use close::*;
pub use exit::*;
pub use ioctl::*;
pub use pipe::*;
pub use read::*;
pub use write::*;
