//! Text grammars accepted for colors.
//!
//! Two encodings are recognised: hex triplets (`#F0A`, `#FF00AA`, with the
//! `#` optional) and `rgb(r, g, b)` tuples with decimal channels. Free-text
//! input goes through [`parse_color`], which picks the grammar up front so
//! the two never compete for the same input.

use crate::error::{Channel, ColorError};
use crate::rgb::Rgb;

const RGB_PREFIX: &str = "rgb";
const RGB_OPEN: &str = "rgb(";
const MAX_HEX_DIGITS: usize = 6;

/// Parse `#RGB` / `#RRGGBB` (leading `#` optional, digits case-insensitive).
pub fn parse_hex(text: &str) -> Result<Rgb, ColorError> {
    let digits = text.strip_prefix('#').unwrap_or(text);
    if digits.is_empty() {
        return Err(ColorError::Empty);
    }

    let nibbles = digits
        .chars()
        .map(|ch| {
            ch.to_digit(16)
                .map(|value| value as u8)
                .ok_or(ColorError::HexDigit(ch))
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match nibbles.as_slice() {
        [r, g, b] => Ok(Rgb::new(r * 17, g * 17, b * 17)),
        [r1, r0, g1, g0, b1, b0] => {
            Ok(Rgb::new(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0))
        },
        other => Err(ColorError::HexLength(other.len())),
    }
}

/// Parse `rgb(r, g, b)` with optional whitespace around every number.
///
/// The `rgb(` prefix is matched literally, lowercase only.
pub fn parse_rgb(text: &str) -> Result<Rgb, ColorError> {
    if text.is_empty() {
        return Err(ColorError::Empty);
    }

    let inner = text
        .strip_prefix(RGB_OPEN)
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or(ColorError::MalformedRgb)?;

    let mut parts = inner.split(',');
    let mut channels = [0u8; 3];
    for (slot, channel) in channels
        .iter_mut()
        .zip([Channel::Red, Channel::Green, Channel::Blue])
    {
        let part = parts.next().ok_or(ColorError::MalformedRgb)?;
        *slot = parse_channel(part.trim(), channel)?;
    }
    if parts.next().is_some() {
        return Err(ColorError::MalformedRgb);
    }

    Ok(Rgb::from(channels))
}

fn parse_channel(part: &str, channel: Channel) -> Result<u8, ColorError> {
    if part.is_empty()
        || part.len() > 3
        || !part.bytes().all(|byte| byte.is_ascii_digit())
    {
        return Err(ColorError::MalformedRgb);
    }

    let value: u16 = part.parse().map_err(|_| ColorError::MalformedRgb)?;
    u8::try_from(value).map_err(|_| ColorError::ChannelOutOfRange {
        channel,
        value: i32::from(value),
    })
}

/// Parse free-form user input.
///
/// Text starting with `rgb` is only ever read as an RGB tuple. Everything
/// else is read as hex, with a `#` added when missing.
pub fn parse_color(text: &str) -> Result<Rgb, ColorError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorError::Empty);
    }

    if text.starts_with(RGB_PREFIX) {
        return parse_rgb(text);
    }

    if text.starts_with('#') {
        parse_hex(text)
    } else {
        parse_hex(&format!("#{text}"))
    }
}

/// Compare two textual colors after normalizing both sides.
///
/// Unparseable input on either side compares unequal.
pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    match (parse_color(a), parse_color(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Whether `text` could still grow into a valid hex color.
pub fn is_hex_color_prefix(text: &str) -> bool {
    let digits = text.strip_prefix('#').unwrap_or(text);
    digits.len() <= MAX_HEX_DIGITS
        && digits.chars().all(|ch| ch.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_six_digit_hex_when_parsed_then_rendering_is_uppercased_input() {
        for input in ["#ff7f50", "#FF7F50", "#a1B2c3", "#000000", "#ffffff"] {
            let color = parse_hex(input).expect("valid hex");
            assert_eq!(color.to_hex(), input.to_uppercase());
        }
    }

    #[test]
    fn given_three_digit_hex_when_parsed_then_digits_are_duplicated() {
        assert_eq!(parse_hex("#abc").unwrap().to_hex(), "#AABBCC");
        assert_eq!(parse_hex("F0A").unwrap().to_hex(), "#FF00AA");
    }

    #[test]
    fn given_hex_without_hash_when_parsed_then_accepted() {
        assert_eq!(parse_hex("00ff00").unwrap(), Rgb::new(0, 255, 0));
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_classified() {
        assert_eq!(parse_hex(""), Err(ColorError::Empty));
        assert_eq!(parse_hex("#"), Err(ColorError::Empty));
        assert_eq!(parse_hex("#GGGGGG"), Err(ColorError::HexDigit('G')));
        assert_eq!(parse_hex("#12345"), Err(ColorError::HexLength(5)));
        assert_eq!(parse_hex("#1234567"), Err(ColorError::HexLength(7)));
        assert_eq!(parse_hex("##123456"), Err(ColorError::HexDigit('#')));
        assert_eq!(parse_hex(" #123456"), Err(ColorError::HexDigit(' ')));
    }

    #[test]
    fn given_rgb_tuple_when_parsed_then_matches_channels() {
        for (r, g, b) in [(0, 0, 0), (255, 127, 80), (1, 22, 255), (9, 99, 199)]
        {
            let text = format!("rgb({r},{g},{b})");
            let parsed = parse_rgb(&text).expect("valid rgb");
            let built = Rgb::from_channels(r, g, b).expect("in range");
            assert_eq!(parsed, built, "{text}");
        }
    }

    #[test]
    fn given_rgb_with_whitespace_when_parsed_then_accepted() {
        assert_eq!(
            parse_rgb("rgb( 12 ,34,  56 )").unwrap(),
            Rgb::new(12, 34, 56)
        );
    }

    #[test]
    fn given_uppercase_rgb_prefix_when_parsed_then_rejected() {
        assert_eq!(parse_rgb("RGB(1, 2, 3)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("Rgb(255,0,0)"), Err(ColorError::MalformedRgb));
        assert_eq!(
            parse_color("Rgb(255,0,0)"),
            Err(ColorError::HexDigit('R'))
        );
    }

    #[test]
    fn given_malformed_rgb_when_parsed_then_rejected() {
        assert_eq!(parse_rgb(""), Err(ColorError::Empty));
        assert_eq!(parse_rgb("rgb(1,2)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb(1,2,3,4)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb(1,2,3"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb 1,2,3)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb(1,,3)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb(-1,2,3)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb(1.5,2,3)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_rgb("rgb(0001,2,3)"), Err(ColorError::MalformedRgb));
        assert_eq!(
            parse_rgb("rgb(256,0,0)"),
            Err(ColorError::ChannelOutOfRange {
                channel: Channel::Red,
                value: 256,
            })
        );
    }

    #[test]
    fn given_free_text_when_parsed_then_grammar_is_chosen_by_prefix() {
        assert_eq!(parse_color("  abc "), Ok(Rgb::new(0xAA, 0xBB, 0xCC)));
        assert_eq!(parse_color("#ABCDEF"), Ok(Rgb::new(0xAB, 0xCD, 0xEF)));
        assert_eq!(parse_color("rgb(1, 2, 3)"), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(parse_color("rgb(1, 2)"), Err(ColorError::MalformedRgb));
        assert_eq!(parse_color("   "), Err(ColorError::Empty));
    }

    #[test]
    fn given_equal_colors_in_different_spellings_then_compare_equal() {
        assert!(equals_ignore_case("#ff0000", "#FF0000"));
        assert!(equals_ignore_case("#f00", "rgb(255, 0, 0)"));
        assert!(!equals_ignore_case("#ff0000", "#ff0001"));
    }

    #[test]
    fn given_unparseable_side_when_compared_then_unequal() {
        assert!(!equals_ignore_case("#ff0000", "red"));
        assert!(!equals_ignore_case("", ""));
    }

    #[test]
    fn given_partial_hex_when_checked_then_prefix_is_recognized() {
        assert!(is_hex_color_prefix(""));
        assert!(is_hex_color_prefix("#"));
        assert!(is_hex_color_prefix("#12a"));
        assert!(is_hex_color_prefix("12ab"));
        assert!(!is_hex_color_prefix("#1234567"));
        assert!(!is_hex_color_prefix("#12x"));
    }
}
