use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Channel, ColorError};
use crate::parse::{parse_color, parse_hex};

/// Canonical RGB color.
///
/// The textual form is always uppercase `#RRGGBB`, so two values are equal
/// exactly when their rendered strings are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from raw slider values.
    ///
    /// Sliders are expected to clamp upstream; anything outside `0..=255`
    /// is reported instead of being silently wrapped.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Result<Self, ColorError> {
        Ok(Self {
            r: channel(Channel::Red, r)?,
            g: channel(Channel::Green, g)?,
            b: channel(Channel::Blue, b)?,
        })
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Render as `#RRGGBB`.
    pub fn to_hex(self) -> String {
        self.to_string()
    }

    /// Render as `rgb(r, g, b)`.
    pub fn to_rgb_string(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn channel(channel: Channel, value: i32) -> Result<u8, ColorError> {
    u8::try_from(value)
        .map_err(|_| ColorError::ChannelOutOfRange { channel, value })
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl Serialize for Rgb {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        parse_hex(&value).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_channels_when_rendered_then_hex_is_uppercase_and_padded() {
        assert_eq!(Rgb::new(255, 127, 80).to_hex(), "#FF7F50");
        assert_eq!(Rgb::new(0, 10, 1).to_hex(), "#000A01");
    }

    #[test]
    fn given_color_when_rendered_as_rgb_then_uses_decimal_channels() {
        assert_eq!(Rgb::new(1, 22, 255).to_rgb_string(), "rgb(1, 22, 255)");
    }

    #[test]
    fn given_slider_values_in_range_when_built_then_color_matches() {
        let color = Rgb::from_channels(0, 128, 255).expect("in range");

        assert_eq!(color.channels(), [0, 128, 255]);
    }

    #[test]
    fn given_slider_value_out_of_range_when_built_then_channel_is_reported() {
        let err = Rgb::from_channels(0, 256, 0).unwrap_err();

        assert_eq!(
            err,
            ColorError::ChannelOutOfRange {
                channel: Channel::Green,
                value: 256,
            }
        );
        assert!(Rgb::from_channels(-1, 0, 0).is_err());
    }

    #[test]
    fn given_color_when_serialized_then_uses_canonical_string() {
        let json = serde_json::to_string(&Rgb::new(170, 187, 204))
            .expect("should serialize");

        assert_eq!(json, "\"#AABBCC\"");
    }

    #[test]
    fn given_lowercase_short_hex_when_deserialized_then_canonicalized() {
        let color: Rgb =
            serde_json::from_str("\"#abc\"").expect("should deserialize");

        assert_eq!(color, Rgb::new(0xAA, 0xBB, 0xCC));
    }

    #[test]
    fn given_rgb_text_when_deserialized_then_rejected() {
        let result = serde_json::from_str::<Rgb>("\"rgb(1, 2, 3)\"");

        assert!(result.is_err());
    }

    #[test]
    fn given_free_text_when_parsed_with_from_str_then_policy_applies() {
        let hex: Rgb = "ff0000".parse().expect("hex without hash");
        let rgb: Rgb = "rgb(255, 0, 0)".parse().expect("rgb form");

        assert_eq!(hex, rgb);
    }
}
