//! Whitespace printer
//!
//! Writes a run of identical bytes, typically spaces or tabs used for column alignment, and
//! returns how many were requested.
//!
//! ```text
//! print_ws(3, b' ')   => 3, "   "
//! print_ws(0, b' ')   => 0, ""
//! print_ws(-5, b'x')  => 0, ""
//! ```

use crate::constants::{DEFAULT_STRATEGY, WS_CHUNK_SIZE};
use crate::err::*;
use crate::os::{Fd, STDOUT};
use crate::types::{c_char, c_int};
use crate::util::BufWriter;

/// How a run of bytes is handed to the kernel
///
/// Both strategies produce the same byte sequence on the fd.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// One write(2) per byte
    PerByte,
    /// Fill a stack chunk with the byte and write it repeatedly
    Batched,
}

/// Write `ws` to stdout `len` times.
///
/// Returns `len`, or `0` if `len <= 0`.  Write failures are not reported; see `try_print_ws`.
pub fn print_ws(len: c_int, ws: c_char) -> c_int {
    print_ws_fd(&STDOUT, len, ws)
}

/// `print_ws` against an arbitrary fd
pub fn print_ws_fd(fd: &Fd, len: c_int, ws: c_char) -> c_int {
    print_ws_with(fd, len, ws, DEFAULT_STRATEGY)
}

pub fn print_ws_with(fd: &Fd, len: c_int, ws: c_char, strategy: Strategy) -> c_int {
    if len <= 0 {
        return 0;
    }
    let count = len as usize;

    // Every byte is attempted regardless of earlier failures, and the requested count is
    // reported even if the fd stopped accepting bytes.
    match strategy {
        Strategy::PerByte => {
            let byte = [ws as u8];
            for _ in 0..count {
                let _ = fd.write(&byte);
            }
        }
        Strategy::Batched => {
            let mut buf = [0u8; WS_CHUNK_SIZE];
            let chunk = fill_chunk(&mut buf, count, ws as u8);

            let mut attempted = 0;
            while attempted < count {
                let step = (count - attempted).min(chunk.len());
                let slice = chunk.get(..step).unwrap_or_default();
                match fd.write(slice) {
                    Ok(n) if n > 0 => attempted += n,
                    // A failed or empty write drops this chunk and moves on
                    _ => attempted += step,
                }
            }
        }
    }
    len
}

/// Write `ws` to stdout `len` times, surfacing the first write failure.
pub fn try_print_ws(len: c_int, ws: c_char) -> Result<c_int, WriteError> {
    try_print_ws_fd(&STDOUT, len, ws)
}

pub fn try_print_ws_fd(fd: &Fd, len: c_int, ws: c_char) -> Result<c_int, WriteError> {
    try_print_ws_with(fd, len, ws, DEFAULT_STRATEGY)
}

pub fn try_print_ws_with(
    fd: &Fd,
    len: c_int,
    ws: c_char,
    strategy: Strategy,
) -> Result<c_int, WriteError> {
    let Ok(count) = usize::try_from(len) else {
        return Ok(0);
    };
    if count == 0 {
        return Ok(0);
    }

    match strategy {
        Strategy::PerByte => write_per_byte(fd, count, ws as u8)?,
        Strategy::Batched => write_batched(fd, count, ws as u8)?,
    }

    Ok(len)
}

fn write_per_byte(fd: &Fd, count: usize, ws: u8) -> Result<(), WriteError> {
    let byte = [ws];
    let mut n = 0;
    while n < count {
        fd.write_all(&byte).map_err(|e| WriteError {
            written: n,
            errno: e.errno,
        })?;
        n += 1;
    }
    Ok(())
}

fn write_batched(fd: &Fd, count: usize, ws: u8) -> Result<(), WriteError> {
    let mut buf = [0u8; WS_CHUNK_SIZE];
    let chunk = fill_chunk(&mut buf, count, ws);

    let mut written = 0;
    while written < count {
        let step = (count - written).min(chunk.len());
        let slice = chunk.get(..step).unwrap_or_default();
        fd.write_all(slice).map_err(|e| WriteError {
            written: written + e.written,
            errno: e.errno,
        })?;
        written += step;
    }
    Ok(())
}

/// Fill up to one chunk of `buf` with `ws`, as much of `count` as fits
fn fill_chunk(buf: &mut [u8; WS_CHUNK_SIZE], count: usize, ws: u8) -> &[u8] {
    let mut chunk = BufWriter::new(buf);
    // Never exceeds the buffer: at most WS_CHUNK_SIZE bytes are requested
    let _ = chunk.fill(ws, count.min(WS_CHUNK_SIZE));
    let len = chunk.pos();
    buf.get(..len).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::os::PipeFlags;

    const STRATEGIES: [Strategy; 2] = [Strategy::PerByte, Strategy::Batched];

    fn pipe() -> (Fd, Fd) {
        Fd::new_pipe(PipeFlags::O_CLOEXEC).unwrap()
    }

    /// Close the write end and collect everything written to the pipe
    fn drain(rd: Fd, wr: Fd) -> Vec<u8> {
        wr.close().unwrap();
        let mut out = Vec::new();
        let mut buf = [0u8; 256];
        loop {
            match rd.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => out.extend_from_slice(&buf[..n]),
                Err(e) => panic!("read failed: {e:?}"),
            }
        }
        rd.close().unwrap();
        out
    }

    #[test]
    fn test_zero_len_prints_nothing() {
        let (rd, wr) = pipe();
        assert_eq!(print_ws_fd(&wr, 0, b' ' as c_char), 0);
        assert_eq!(drain(rd, wr), b"");
    }

    #[test]
    fn test_negative_len_prints_nothing() {
        for strategy in STRATEGIES {
            let (rd, wr) = pipe();
            assert_eq!(print_ws_with(&wr, -5, b'x' as c_char, strategy), 0);
            assert_eq!(print_ws_with(&wr, c_int::MIN, b'x' as c_char, strategy), 0);
            assert_eq!(try_print_ws_with(&wr, -1, b'x' as c_char, strategy), Ok(0));
            assert_eq!(drain(rd, wr), b"");
        }
    }

    #[test]
    fn test_three_spaces() {
        let (rd, wr) = pipe();
        assert_eq!(print_ws_fd(&wr, 3, b' ' as c_char), 3);
        assert_eq!(drain(rd, wr), b"   ");
    }

    #[test]
    fn test_single_tab() {
        let (rd, wr) = pipe();
        assert_eq!(print_ws_fd(&wr, 1, b'\t' as c_char), 1);
        assert_eq!(drain(rd, wr), b"\t");
    }

    #[test]
    fn test_byte_value_is_not_inspected() {
        for ws in [0x00u8, 0x7f, 0x80, 0xff] {
            for strategy in STRATEGIES {
                let (rd, wr) = pipe();
                assert_eq!(print_ws_with(&wr, 4, ws as c_char, strategy), 4);
                assert_eq!(drain(rd, wr), [ws; 4]);
            }
        }
    }

    #[test]
    fn test_strategies_agree_around_chunk_size() {
        for len in [1, WS_CHUNK_SIZE - 1, WS_CHUNK_SIZE, WS_CHUNK_SIZE + 1, 3 * WS_CHUNK_SIZE + 7] {
            let len = len as c_int;
            let mut outputs = Vec::new();
            for strategy in STRATEGIES {
                let (rd, wr) = pipe();
                assert_eq!(try_print_ws_with(&wr, len, b'-' as c_char, strategy), Ok(len));
                outputs.push(drain(rd, wr));
            }
            assert_eq!(outputs[0].len(), len as usize);
            assert!(outputs[0].iter().all(|&b| b == b'-'));
            assert_eq!(outputs[0], outputs[1]);
        }
    }

    #[test]
    fn test_repeated_calls_accumulate() {
        let (rd, wr) = pipe();
        let first = print_ws_fd(&wr, 2, b'.' as c_char);
        let second = print_ws_fd(&wr, 2, b'.' as c_char);
        assert_eq!(first, 2);
        assert_eq!(second, 2);
        assert_eq!(drain(rd, wr), b"....");
    }

    #[test]
    fn test_failed_write_still_reports_len() {
        // Writing into the read end of a pipe is EBADF
        for strategy in STRATEGIES {
            let (rd, wr) = pipe();
            assert_eq!(print_ws_with(&rd, 5, b' ' as c_char, strategy), 5);
            assert_eq!(drain(rd, wr), b"");
        }
    }

    #[test]
    fn test_keeps_writing_after_transient_failure() {
        // Start with a full non-blocking pipe so the first writes fail with EAGAIN, then let a
        // reader free up space while the run is still in progress.
        for (strategy, len) in [
            (Strategy::PerByte, 2_000_000),
            (Strategy::Batched, 2_000_000 * WS_CHUNK_SIZE as c_int),
        ] {
            let (rd, wr) = Fd::new_pipe(PipeFlags::O_CLOEXEC | PipeFlags::O_NONBLOCK).unwrap();

            let mut filled = 0;
            while let Ok(n) = wr.write(&[b'F'; 4096]) {
                filled += n;
            }
            assert_eq!(wr.write(b"F"), Err(Errno::EAGAIN));

            let reader = std::thread::spawn(move || {
                std::thread::sleep(std::time::Duration::from_millis(1));
                let (mut filler, mut spaces) = (0usize, 0usize);
                let mut buf = [0u8; 65536];
                loop {
                    match rd.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            for &b in &buf[..n] {
                                match b {
                                    b'F' => filler += 1,
                                    b' ' => spaces += 1,
                                    other => panic!("unexpected byte {other}"),
                                }
                            }
                        }
                        Err(e) if e == Errno::EAGAIN => std::thread::yield_now(),
                        Err(e) => panic!("read failed: {e:?}"),
                    }
                }
                rd.close().unwrap();
                (filler, spaces)
            });

            assert_eq!(print_ws_with(&wr, len, b' ' as c_char, strategy), len);
            wr.close().unwrap();

            let (filler, spaces) = reader.join().unwrap();
            assert_eq!(filler, filled);
            assert!(spaces > 0, "{strategy:?} gave up after the first EAGAIN");
            assert!(spaces <= len as usize);
        }
    }

    #[test]
    fn test_try_surfaces_failed_write() {
        for strategy in STRATEGIES {
            let (rd, wr) = pipe();
            assert_eq!(
                try_print_ws_with(&rd, 5, b' ' as c_char, strategy),
                Err(WriteError {
                    written: 0,
                    errno: Errno::EBADF,
                })
            );
            assert_eq!(drain(rd, wr), b"");
        }
    }

    #[test]
    fn test_try_zero_len_skips_write() {
        // No write is attempted, so even an unwritable fd succeeds
        let (rd, wr) = pipe();
        assert_eq!(try_print_ws_fd(&rd, 0, b' ' as c_char), Ok(0));
        assert_eq!(drain(rd, wr), b"");
    }
}
