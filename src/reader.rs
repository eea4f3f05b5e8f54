use std::io::BufRead;

use crate::error::{Error, ErrorKind, Result};

// Matches the scanner limit of the original detail-file consumers.
pub const MAX_LINE_LEN: usize = 64 * 1024;

pub struct LineReader<R> {
    inner: R,
    delim: u8,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            delim: b'\n',
        }
    }

    pub fn with_delimiter(inner: R, delim: u8) -> Self {
        Self { inner, delim }
    }
}

impl<R: BufRead> std::iter::Iterator for LineReader<R> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut buf = Vec::new();
        match self.inner.read_until(self.delim, &mut buf) {
            Ok(0) => None, // EOF
            Ok(_) => {
                if buf.last() == Some(&self.delim) {
                    buf.pop();
                    if self.delim == b'\n' && buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                if buf.len() > MAX_LINE_LEN {
                    return Some(Err(Error::new(
                        ErrorKind::ScanFailure,
                        &format!("line longer than {} bytes", MAX_LINE_LEN),
                    )));
                }
                Some(Ok(String::from_utf8_lossy(&buf).into_owned()))
            }
            Err(e) => Some(Err(Error::with_source(
                ErrorKind::ScanFailure,
                "input reader failed",
                e,
            ))),
        }
    }
}
