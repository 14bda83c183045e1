//! Safe wrappers over `crate::syscall`.

mod argv;
mod exit;
mod fd;
mod print;

pub use argv::*;
pub use exit::*;
pub use fd::*;
pub use print::*;
