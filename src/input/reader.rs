use std::io::{self, BufRead};

/// Reads one line at a time from any buffered source.
pub struct LineReader<R> {
    source: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Returns the raw bytes of the next line including its newline, or `None`
    /// once the input is exhausted. A final line without a trailing newline is
    /// still returned. No decoding happens here.
    pub fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        let read = self.source.read_until(b'\n', &mut line)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
