use byteorder::{BigEndian, WriteBytesExt};
use serde::Serialize;
use std::io;
use std::io::Write;
use std::fmt;
use std::fmt::{Display, Formatter};

use crate::models::{AMOUNT_LENGTH, BASE_RECORD_LENGTH};
use crate::types::{Timestamp, UserId};

/// The four record types a log can carry, keyed by their tag byte.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub enum RecordKind {
    Debit,
    Credit,
    #[serde(rename = "StartAutopay")]
    AutopayStart,
    #[serde(rename = "EndAutopay")]
    AutopayEnd
}

impl RecordKind {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x00 => Some(Self::Debit),
            0x01 => Some(Self::Credit),
            0x02 => Some(Self::AutopayStart),
            0x03 => Some(Self::AutopayEnd),
            _ => None
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            Self::Debit => 0x00,
            Self::Credit => 0x01,
            Self::AutopayStart => 0x02,
            Self::AutopayEnd => 0x03
        }
    }

    /// Whether an 8 byte amount follows the common prefix.
    pub fn carries_amount(self) -> bool {
        matches!(self, Self::Debit | Self::Credit)
    }

    /// Size of a whole record of this kind on the wire.
    pub fn encoded_len(self) -> usize {
        if self.carries_amount() {
            BASE_RECORD_LENGTH + AMOUNT_LENGTH
        } else {
            BASE_RECORD_LENGTH
        }
    }

    /// Turns the magnitude found on the wire into the ledger amount.
    ///
    /// The format only stores magnitudes; a debit is a withdrawal, so its sign
    /// comes from the tag.
    pub fn signed_amount(self, magnitude: f64) -> f64 {
        match self {
            Self::Debit => -magnitude,
            _ => magnitude
        }
    }

    /// Inverse of [`RecordKind::signed_amount`].
    pub fn magnitude(self, amount: f64) -> f64 {
        match self {
            Self::Debit => -amount,
            _ => amount
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Debit => "Debit",
            Self::Credit => "Credit",
            Self::AutopayStart => "StartAutopay",
            Self::AutopayEnd => "EndAutopay"
        }
    }
}

impl Display for RecordKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// One decoded entry of a transaction log.
///
/// Debit amounts are already negated, so summing amounts across kinds gives a
/// balance directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Record {
    Debit {
        timestamp: Timestamp,
        user_id: UserId,
        amount: f64
    },
    Credit {
        timestamp: Timestamp,
        user_id: UserId,
        amount: f64
    },
    AutopayStart {
        timestamp: Timestamp,
        user_id: UserId
    },
    AutopayEnd {
        timestamp: Timestamp,
        user_id: UserId
    }
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Debit { .. } => RecordKind::Debit,
            Self::Credit { .. } => RecordKind::Credit,
            Self::AutopayStart { .. } => RecordKind::AutopayStart,
            Self::AutopayEnd { .. } => RecordKind::AutopayEnd
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        match self {
            Self::Debit { timestamp, .. }
            | Self::Credit { timestamp, .. }
            | Self::AutopayStart { timestamp, .. }
            | Self::AutopayEnd { timestamp, .. } => *timestamp
        }
    }

    pub fn user_id(&self) -> UserId {
        match self {
            Self::Debit { user_id, .. }
            | Self::Credit { user_id, .. }
            | Self::AutopayStart { user_id, .. }
            | Self::AutopayEnd { user_id, .. } => *user_id
        }
    }

    /// Signed amount, `None` for autopay changes.
    pub fn amount(&self) -> Option<f64> {
        match self {
            Self::Debit { amount, .. } | Self::Credit { amount, .. } => Some(*amount),
            Self::AutopayStart { .. } | Self::AutopayEnd { .. } => None
        }
    }

    pub fn encoded_len(&self) -> usize {
        self.kind().encoded_len()
    }

    /// Writes the wire form of this record, restoring the unsigned magnitude
    /// for debits.
    pub fn encode_into<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        let kind = self.kind();

        writer.write_u8(kind.tag())?;
        writer.write_u32::<BigEndian>(self.timestamp().as_unix())?;
        writer.write_u64::<BigEndian>(self.user_id())?;

        if let Some(amount) = self.amount() {
            writer.write_f64::<BigEndian>(kind.magnitude(amount))?;
        }

        Ok(())
    }

    pub fn to_bytes(&self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::with_capacity(self.encoded_len());
        self.encode_into(&mut buffer)?;
        Ok(buffer)
    }
}
