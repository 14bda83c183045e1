//! Safe, panic-free buffer writer with offset tracking

use crate::err::Errno;

pub struct BufWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> BufWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Append `count` copies of `byte`, returning an error if it would overflow
    pub fn fill(&mut self, byte: u8, count: usize) -> Result<(), Errno> {
        let end = self.reserve(count)?;

        // # SAFETY
        //
        // reserve() verified self.pos + count <= self.buf.len().
        unsafe { core::ptr::write_bytes(self.buf.as_mut_ptr().add(self.pos), byte, count) };
        self.pos = end;
        Ok(())
    }

    /// Get the current write position
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Get a reference to the populated segment of the buffer
    pub fn as_slice(&self) -> &[u8] {
        // # SAFETY
        //
        // We've been actively tracking pos relative to buffer size to ensure this works.
        unsafe { self.buf.get_unchecked(0..self.pos) }
    }

    /// Position after `len` more bytes, if they fit
    fn reserve(&self, len: usize) -> Result<usize, Errno> {
        let end = self.pos.checked_add(len).ok_or(Errno::EOVERFLOW)?;
        if end > self.buf.len() {
            return Err(Errno::EOVERFLOW);
        }
        Ok(end)
    }
}
