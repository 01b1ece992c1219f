use crate::types::Magic;

/// What to do with bytes left over once the declared records are decoded.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum TrailingBytesPolicy {
    /// Fail the decode with `DecodeError::TrailingBytes`.
    #[default]
    Reject,
    /// Log a warning and keep the decoded records.
    Warn
}

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct DecoderConfig {
    /// When set, a header carrying any other magic fails with
    /// `DecodeError::FormatMismatch`. When unset the magic is only reported.
    pub expected_magic: Option<Magic>,
    pub trailing_bytes: TrailingBytesPolicy
}
