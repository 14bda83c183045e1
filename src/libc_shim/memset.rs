/// memset implementation to satisfy Rust core crate requirements
///
/// Array initializers such as `[b; N]` and `core::ptr::write_bytes` may lower to this symbol.
#[cfg(not(test))]
#[unsafe(no_mangle)]
unsafe extern "C" fn memset(
    dest: *mut core::ffi::c_void,
    c: core::ffi::c_int,
    n: usize,
) -> *mut core::ffi::c_void {
    // Safety:
    // - This is satisfying a C API requirement which isn't really safe.
    // - Caller must ensure dest is valid for n bytes
    // - We implement this manually with volatile stores to avoid calling core::ptr::write_bytes
    //   which would cause infinite recursion since it calls memset internally
    unsafe {
        let byte = c as u8;
        let mut dest_ptr = dest as *mut u8;
        let mut count = n;

        // Store 8 bytes at a time when aligned
        if (dest_ptr as usize).is_multiple_of(8) {
            let word = (byte as u64) * 0x0101_0101_0101_0101;
            while count >= 8 {
                core::ptr::write_volatile(dest_ptr as *mut u64, word);
                dest_ptr = dest_ptr.add(8);
                count -= 8;
            }
        }

        while count > 0 {
            core::ptr::write_volatile(dest_ptr, byte);
            dest_ptr = dest_ptr.add(1);
            count -= 1;
        }
    }
    dest
}
