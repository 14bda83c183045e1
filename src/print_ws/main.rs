#![cfg_attr(not(test), no_std)]
#![cfg_attr(not(test), no_main)]

// Implementation of features Rust core expects from libc
//
// This conflicts with anything which uses std, including tests.  To avoid this conflict, this
// binary `mod`s it directly rather than `mod`ing it in the shared `lib.rs`.
//
// We don't need to use this, just make it visible to the linker.
#[cfg(not(test))]
#[path = "../libc_shim/mod.rs"]
mod libc_shim;

mod cmd;

/// # Safety
///
/// Platform ABI guarantees incoming C-style format
#[cfg(not(test))]
#[unsafe(no_mangle)]
pub unsafe extern "C" fn main(
    argc: isize,
    argv: *const *const core::ffi::c_char,
    _envp: *const *const core::ffi::c_char,
) -> isize {
    let argv = unsafe { libft::os::Argv::from_raw(argc, argv) };

    cmd::Cmd::new(argv).run()
}
