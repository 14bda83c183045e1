//! C ABI types shared across the system call wrappers and the public print routines.

#[allow(non_camel_case_types)]
pub type c_int = core::ffi::c_int;

#[allow(non_camel_case_types)]
pub type c_char = core::ffi::c_char;

pub type CStr = core::ffi::CStr;

/// Parse a signed decimal count such as the `COUNT` argument of `print_ws`.
///
/// Accepts an optional leading `-` followed by one or more ASCII digits.  Anything else,
/// including values outside of `c_int`, is `EINVAL`.
pub trait CountParse {
    fn parse_count(&self) -> Result<c_int, crate::err::Errno>;
}

impl CountParse for &[u8] {
    fn parse_count(&self) -> Result<c_int, crate::err::Errno> {
        let (negative, digits) = match self.split_first() {
            Some((b'-', rest)) => (true, rest),
            _ => (false, *self),
        };

        if digits.is_empty() {
            return Err(crate::err::Errno::EINVAL);
        }

        // Accumulate toward the sign so that c_int::MIN parses without overflow
        let mut result: c_int = 0;
        for &b in digits {
            if !b.is_ascii_digit() {
                return Err(crate::err::Errno::EINVAL);
            }
            let digit = (b - b'0') as c_int;
            result = result
                .checked_mul(10)
                .and_then(|r| {
                    if negative {
                        r.checked_sub(digit)
                    } else {
                        r.checked_add(digit)
                    }
                })
                .ok_or(crate::err::Errno::EINVAL)?;
        }
        Ok(result)
    }
}

impl CountParse for &CStr {
    fn parse_count(&self) -> Result<c_int, crate::err::Errno> {
        self.to_bytes().parse_count()
    }
}

/// Parse the `CHAR` argument of `print_ws`.
///
/// A single byte is taken as-is.  Two-byte escapes `\t`, `\n`, `\s` (space) and `\\` name bytes
/// which are awkward to pass through a shell.  Empty or longer arguments are `EINVAL`.
pub trait WsParse {
    fn parse_ws(&self) -> Result<c_char, crate::err::Errno>;
}

impl WsParse for &[u8] {
    fn parse_ws(&self) -> Result<c_char, crate::err::Errno> {
        let byte = match *self {
            [b] => *b,
            [b'\\', b't'] => b'\t',
            [b'\\', b'n'] => b'\n',
            [b'\\', b's'] => b' ',
            [b'\\', b'\\'] => b'\\',
            _ => return Err(crate::err::Errno::EINVAL),
        };
        Ok(byte as c_char)
    }
}

impl WsParse for &CStr {
    fn parse_ws(&self) -> Result<c_char, crate::err::Errno> {
        self.to_bytes().parse_ws()
    }
}
