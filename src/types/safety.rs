//! Content-safety ranking.

use crate::error::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Closed content-safety ranking produced by the moderation engine.
///
/// Total order: `Safe < Sensitive < Unsafe`, with `Safe` the unique
/// minimum. The wire carries the numeric code (0, 1 or 2); an out-of-range
/// code fails construction explicitly rather than clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SafetyRating {
    Safe = 0,
    Sensitive = 1,
    Unsafe = 2,
}

impl SafetyRating {
    /// Numeric code as it appears on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for SafetyRating {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(SafetyRating::Safe),
            1 => Ok(SafetyRating::Sensitive),
            2 => Ok(SafetyRating::Unsafe),
            other => Err(Error::decode(format!(
                "safety rating code out of range: {other}"
            ))),
        }
    }
}

impl Serialize for SafetyRating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for SafetyRating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = u8::deserialize(deserializer)?;
        SafetyRating::try_from(code).map_err(serde::de::Error::custom)
    }
}
