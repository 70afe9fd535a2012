use std::fmt;

use thiserror::Error;

/// One of the three RGB channels, used to point at the offending value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Reasons a textual or numeric color was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("color value is empty")]
    Empty,

    #[error("hex color must have 3 or 6 digits, got {0}")]
    HexLength(usize),

    #[error("invalid hex digit {0:?}")]
    HexDigit(char),

    #[error("expected rgb(r, g, b)")]
    MalformedRgb,

    #[error("{channel} channel {value} is outside 0..=255")]
    ChannelOutOfRange { channel: Channel, value: i32 },
}
