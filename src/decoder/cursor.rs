use std::io;
use std::io::Read;

use byteorder::{BigEndian, ReadBytesExt};

use crate::models::DecodeError;

/// Forward-only reader over an immutable byte buffer.
///
/// Offsets reported in errors are absolute: `origin` is where `bytes` starts
/// within the original input.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    reader: io::Cursor<&'a [u8]>,
    origin: usize
}

impl<'a> Cursor<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_origin(bytes, 0)
    }

    pub fn with_origin(bytes: &'a [u8], origin: usize) -> Self {
        Self {
            reader: io::Cursor::new(bytes),
            origin
        }
    }

    fn position(&self) -> usize {
        self.reader.position() as usize
    }

    /// Absolute offset of the next unread byte.
    pub fn offset(&self) -> usize {
        self.origin + self.position()
    }

    pub fn remaining(&self) -> usize {
        self.reader.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }

    /// Fails unless at least `needed` bytes are left, without consuming any.
    pub fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        if self.remaining() < needed {
            return Err(DecodeError::truncated(self.offset(), needed, self.remaining()))
        }

        Ok(())
    }

    /// Checks the length up front so a short read is reported with the offset
    /// where the field starts rather than wherever the reader gave up.
    fn read_field<T, F>(&mut self, needed: usize, read: F) -> Result<T, DecodeError>
    where
        F: FnOnce(&mut io::Cursor<&'a [u8]>) -> io::Result<T>,
    {
        self.ensure(needed)?;

        let offset = self.offset();
        let available = self.remaining();

        read(&mut self.reader).map_err(|_| DecodeError::truncated(offset, needed, available))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        self.read_field(N, |reader| {
            let mut array = [0u8; N];
            reader.read_exact(&mut array)?;
            Ok(array)
        })
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.read_field(1, |reader| reader.read_u8())
    }

    pub fn read_u32(&mut self) -> Result<u32, DecodeError> {
        self.read_field(4, |reader| reader.read_u32::<BigEndian>())
    }

    pub fn read_u64(&mut self) -> Result<u64, DecodeError> {
        self.read_field(8, |reader| reader.read_u64::<BigEndian>())
    }

    pub fn read_f64(&mut self) -> Result<f64, DecodeError> {
        self.read_field(8, |reader| reader.read_f64::<BigEndian>())
    }
}
