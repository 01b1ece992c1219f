mod timestamp;

pub use timestamp::Timestamp;

pub type UserId = u64;
pub type Version = u8;
pub type RecordCount = u32;

/// Four byte format tag at the start of every log.
pub type Magic = [u8; 4];

/// The magic carried by every log produced so far.
pub const MPS7_MAGIC: Magic = *b"MPS7";
