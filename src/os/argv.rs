use core::ffi::{CStr, c_char};

/// Ergonomic wrapper over ABI standard argv pointer.
pub struct Argv<'a> {
    raw: &'a [*const c_char],
}

impl<'a> Argv<'a> {
    /// # Safety
    /// - `argv..argv+argc` must be valid for reads during `'a`.
    /// - Ideally immediately use ABI-provided argc+argv in main()
    pub const unsafe fn from_raw(argc: isize, argv: *const *const c_char) -> Self {
        Self {
            raw: unsafe { core::slice::from_raw_parts(argv, argc as usize) },
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Look at the next argument without consuming it
    #[inline]
    pub fn peek(&self) -> Option<&'a CStr> {
        self.raw.first().map(|&p| unsafe { CStr::from_ptr(p) })
    }

    #[inline]
    pub fn pop(&mut self) -> Option<&'a CStr> {
        let (&head, tail) = self.raw.split_first()?;
        // SAFETY: caller guaranteed argv pointers are valid for reads during 'a.
        let head_cstr = unsafe { CStr::from_ptr(head) };
        self.raw = tail;
        Some(head_cstr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pop_in_order() {
        let raw = [c"print_ws".as_ptr(), c"3".as_ptr(), c"x".as_ptr()];
        let mut argv = unsafe { Argv::from_raw(raw.len() as isize, raw.as_ptr()) };

        assert_eq!(argv.len(), 3);
        assert_eq!(argv.peek(), Some(c"print_ws"));
        assert_eq!(argv.pop(), Some(c"print_ws"));
        assert_eq!(argv.pop(), Some(c"3"));
        assert_eq!(argv.peek(), Some(c"x"));
        assert_eq!(argv.pop(), Some(c"x"));
        assert!(argv.is_empty());
        assert_eq!(argv.pop(), None);
        assert_eq!(argv.peek(), None);
    }
}
