//! Zeroizing buffered output for generated passwords.

use std::io::{self, Write};

use zeroize::Zeroize;

const BUF_CAP: usize = 8 * 1024;

/// Buffered writer that wipes its internal buffer after every flush and on
/// drop, so password bytes do not linger in a dead heap allocation.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_CAP),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if self.buf.is_empty() {
            return Ok(());
        }
        let result = self.inner.write_all(&self.buf);
        // Zeroize wipes the full capacity and truncates to empty.
        self.buf.zeroize();
        result
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_CAP {
            self.flush_buf()?;
        }
        if data.len() >= BUF_CAP {
            // Oversized writes bypass the buffer; the caller owns that
            // memory and its cleanup.
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_pass_through_on_flush() {
        let mut sink = Vec::new();
        let mut writer = SecureBufWriter::new(&mut sink);
        writer.write_all(b"secret1\n").unwrap();
        writer.write_all(b"secret2\n").unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(sink, b"secret1\nsecret2\n");
    }

    #[test]
    fn drop_flushes_pending_bytes() {
        let mut sink = Vec::new();
        {
            let mut writer = SecureBufWriter::new(&mut sink);
            writer.write_all(b"pending").unwrap();
        }
        assert_eq!(sink, b"pending");
    }

    #[test]
    fn buffer_is_wiped_after_flush() {
        let mut sink = Vec::new();
        let mut writer = SecureBufWriter::new(&mut sink);
        writer.write_all(b"secret").unwrap();
        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
    }

    #[test]
    fn oversized_write_bypasses_buffer() {
        let mut sink = Vec::new();
        let big = vec![b'x'; BUF_CAP + 1];
        let mut writer = SecureBufWriter::new(&mut sink);
        writer.write_all(b"ab").unwrap();
        writer.write_all(&big).unwrap();
        writer.flush().unwrap();
        drop(writer);
        assert_eq!(sink.len(), 2 + big.len());
        assert_eq!(&sink[..2], b"ab");
    }
}
