use crate::error::{ParseError, ParseResult};

/// 8-bit channels as read from a colour code, alpha first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Argb {
    pub alpha: u8,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Argb {
    pub const OPAQUE_ALPHA: u8 = u8::MAX;

    #[must_use]
    pub const fn opaque(red: u8, green: u8, blue: u8) -> Self {
        Self {
            alpha: Self::OPAQUE_ALPHA,
            red,
            green,
            blue,
        }
    }

    /// Unpacks `0xAARRGGBB`.
    #[must_use]
    pub const fn from_u32(argb: u32) -> Self {
        Self {
            alpha: (argb >> 24) as u8,
            red: ((argb >> 16) & 0xFF) as u8,
            green: ((argb >> 8) & 0xFF) as u8,
            blue: (argb & 0xFF) as u8,
        }
    }

    /// Packs into `0xAARRGGBB`.
    #[must_use]
    pub const fn to_u32(self) -> u32 {
        ((self.alpha as u32) << 24)
            | ((self.red as u32) << 16)
            | ((self.green as u32) << 8)
            | (self.blue as u32)
    }
}

const fn nibble(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}

/// Parses a bare colour code of hex digits.
///
/// * `RGB`: each digit is replicated into both nibbles of its channel, alpha is opaque
/// * `RRGGBB`: alpha is opaque
/// * `AARRGGBB`
///
/// Digits are case-insensitive. No prefix, sign or whitespace is accepted.
///
/// # Errors
/// When `hex` is empty, is not 3, 6 or 8 bytes long, or contains anything
/// other than ASCII hex digits. Positions and lengths are reported in bytes.
pub const fn parse(hex: &str) -> ParseResult<Argb> {
    let digits = hex.as_bytes();
    let len = digits.len();
    match len {
        0 => return Err(ParseError::Empty),
        3 | 6 | 8 => {}
        _ => return Err(ParseError::InvalidLength(len)),
    }

    let mut value = 0_u32;
    let mut i = 0;
    while i < len {
        let Some(n) = nibble(digits[i]) else {
            return Err(ParseError::InvalidDigit(i));
        };
        value = (value << 4) | n as u32;
        i += 1;
    }

    let argb = match len {
        3 => Argb::opaque(
            ((value >> 8) & 0xF) as u8 * 17,
            ((value >> 4) & 0xF) as u8 * 17,
            (value & 0xF) as u8 * 17,
        ),
        6 => Argb::opaque(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ),
        _ => Argb::from_u32(value),
    };
    Ok(argb)
}
