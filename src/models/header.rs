use std::borrow::Cow;
use std::io;
use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::models::HEADER_LENGTH;
use crate::types::{Magic, RecordCount, Version};

/// The fixed preamble of a transaction log.
///
/// Layout (big-endian): `magic: [u8; 4] | version: u8 | record_count: u32`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Header {
    /// Format tag, `MPS7` for every known log.
    pub magic: Magic,
    pub version: Version,
    /// How many records follow. Nothing else marks the end of the stream.
    pub record_count: RecordCount
}

impl Header {
    pub fn new(magic: Magic, version: Version, record_count: RecordCount) -> Self {
        Self { magic, version, record_count }
    }

    /// The magic as text, for display only.
    pub fn magic_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.magic)
    }

    pub fn encode_into<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        writer.write_all(&self.magic)?;
        writer.write_u8(self.version)?;
        writer.write_u32::<BigEndian>(self.record_count)?;

        Ok(())
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(HEADER_LENGTH);
        self.encode_into(&mut buffer)?;
        Ok(buffer)
    }
}
