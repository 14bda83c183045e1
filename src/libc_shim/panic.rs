use libft::os::{Print, eprint, eprintln, exit};

/// Panic handler
///
/// Nothing in print_ws is expected to panic: arguments are validated with `OrAbort*` and buffer
/// access goes through `BufWriter`.  Some part of Rust still expects a panic handler even if it is
/// removed as dead code.
#[cfg_attr(not(test), panic_handler)]
fn panic(info: &core::panic::PanicInfo) -> ! {
    #[cfg(debug_assertions)]
    {
        eprint("Panic!");
        if let Some(e) = info.message().as_str() {
            eprint(" ");
            eprint(e);
        }
        eprint("\n");
        if let Some(loc) = info.location() {
            eprint("File: ");
            eprint(loc.file());
            eprint(":");
            eprint(loc.line() as usize);
            eprint(":");
            eprint(loc.column() as usize);
            eprint("\n");
        }
    }

    // If this code path shows up in the resulting release binary, the compiler failed to prove
    // that no panic is reachable.
    eprintln("unexpected panic");
    exit(1);
}
