pub mod hsb;

use std::{fmt, str::FromStr};

use crate::{
    error::ParseError,
    fallback::Fallback,
    hex::{self, Argb},
};

const fn normalise(channel: u8) -> f64 {
    channel as f64 / 255.
}

fn quantise(channel: f64) -> u8 {
    (channel * 255.).round() as u8
}

const fn clamp_channel(channel: f64) -> f64 {
    if channel.is_nan() || channel < 0. {
        0.
    } else if channel > 1. {
        1.
    } else {
        channel
    }
}

/// An sRGB colour with straight (non-premultiplied) alpha.
///
/// Every channel lies in `0.0..=1.0`. Values are immutable: operations such as
/// [`Color::inverse`] return a new colour.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl Color {
    pub const TRANSPARENT: Self = Self::from_channels(0., 0., 0., 0.);

    /// Builds a colour from normalised channels.
    ///
    /// Channels outside `0.0..=1.0` are clamped into range, and `NaN` becomes `0.0`.
    #[must_use]
    pub const fn from_channels(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_channel(alpha),
        }
    }

    #[must_use]
    pub const fn from_argb(argb: Argb) -> Self {
        Self {
            red: normalise(argb.red),
            green: normalise(argb.green),
            blue: normalise(argb.blue),
            alpha: normalise(argb.alpha),
        }
    }

    /// Parses a bare 3, 6 or 8 digit colour code, yielding nothing if it is invalid.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::from_hex_with(hex, Fallback::Absent)
    }

    /// Parses a bare 3, 6 or 8 digit colour code, falling back to
    /// [`Color::TRANSPARENT`] if it is invalid.
    #[must_use]
    pub fn from_hex_or_default(hex: &str) -> Self {
        Self::from_hex_with(hex, Fallback::Transparent).unwrap_or_default()
    }

    #[must_use]
    pub fn from_hex_with(hex: &str, fallback: Fallback) -> Option<Self> {
        let parsed = hex::parse(hex);
        if let Err(error) = &parsed {
            tracing::trace!(hex, %error, "rejected colour code");
        }
        fallback.resolve(parsed)
    }

    #[must_use]
    pub const fn red(&self) -> f64 {
        self.red
    }

    #[must_use]
    pub const fn green(&self) -> f64 {
        self.green
    }

    #[must_use]
    pub const fn blue(&self) -> f64 {
        self.blue
    }

    #[must_use]
    pub const fn alpha(&self) -> f64 {
        self.alpha
    }

    #[must_use]
    pub fn to_argb(&self) -> Argb {
        Argb {
            alpha: quantise(self.alpha),
            red: quantise(self.red),
            green: quantise(self.green),
            blue: quantise(self.blue),
        }
    }

    #[must_use]
    pub fn red_hex(&self) -> String {
        format!("{:02X}", quantise(self.red))
    }

    #[must_use]
    pub fn green_hex(&self) -> String {
        format!("{:02X}", quantise(self.green))
    }

    #[must_use]
    pub fn blue_hex(&self) -> String {
        format!("{:02X}", quantise(self.blue))
    }

    #[must_use]
    pub fn alpha_hex(&self) -> String {
        format!("{:02X}", quantise(self.alpha))
    }

    /// `RRGGBB` in uppercase. Alpha is dropped.
    #[must_use]
    pub fn hex(&self) -> String {
        self.red_hex() + &self.green_hex() + &self.blue_hex()
    }

    /// `AARRGGBB` in uppercase, the same layout [`Color::from_hex`] reads for 8 digits.
    #[must_use]
    pub fn argb_hex(&self) -> String {
        format!("{:08X}", self.to_argb().to_u32())
    }

    /// Every channel, alpha included, replaced by its complement.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            red: 1. - self.red,
            green: 1. - self.green,
            blue: 1. - self.blue,
            alpha: 1. - self.alpha,
        }
    }
}

impl From<Argb> for Color {
    fn from(value: Argb) -> Self {
        Self::from_argb(value)
    }
}

impl From<Color> for Argb {
    fn from(value: Color) -> Self {
        value.to_argb()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argb_hex())
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_argb(hex::parse(s)?))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.argb_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = <String as serde::Deserialize>::deserialize(deserializer)?;
        hex.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod test {
    use rstest::rstest;

    use super::Color;
    use crate::{error::ParseError, hex::Argb};

    const TOLERANCE: f64 = 1e-9;

    fn assert_close(left: Color, right: Color) {
        let channels = |c: Color| [c.red(), c.green(), c.blue(), c.alpha()];
        for (l, r) in channels(left).into_iter().zip(channels(right)) {
            assert!((l - r).abs() < TOLERANCE, "{left:?} != {right:?}");
        }
    }

    #[test]
    fn rgb_components() {
        let color = Color::from_hex("F3F2F1").expect("valid colour code");
        assert_eq!(color.red_hex(), "F3");
        assert_eq!(color.green_hex(), "F2");
        assert_eq!(color.blue_hex(), "F1");
        assert_eq!(color.alpha(), 1.);
        assert_eq!(color.hex(), "F3F2F1");
    }

    #[rstest]
    #[case("F00")]
    #[case("FF0000")]
    #[case("FFFF0000")]
    #[case("ff0000")]
    fn creation_matches_channels(#[case] input: &str) {
        assert_eq!(
            Color::from_hex(input),
            Some(Color::from_channels(1., 0., 0., 1.))
        );
    }

    #[rstest]
    #[case("000000")]
    #[case("FFFFFF")]
    #[case("7B2D43")]
    #[case("59656f")]
    #[case("0a0b0c")]
    #[case("f3f2f1")]
    fn six_digit_hex_round_trips(#[case] input: &str) {
        let color = Color::from_hex(input).expect("valid colour code");
        assert_eq!(color.hex(), input.to_ascii_uppercase());
    }

    #[rstest]
    #[case("F00", "FF0000")]
    #[case("abc", "AABBCC")]
    #[case("069", "006699")]
    fn three_digit_hex_doubles_nibbles(#[case] input: &str, #[case] expected: &str) {
        let color = Color::from_hex(input).expect("valid colour code");
        assert_eq!(color.hex(), expected);
        assert_eq!(color.alpha(), 1.);
    }

    #[rstest]
    #[case("80FF0000", "80")]
    #[case("00123456", "00")]
    #[case("1a123456", "1A")]
    fn eight_digit_hex_leads_with_alpha(#[case] input: &str, #[case] expected: &str) {
        let color = Color::from_hex(input).expect("valid colour code");
        assert_eq!(color.alpha_hex(), expected);
        assert_eq!(color.argb_hex(), input.to_ascii_uppercase());
    }

    #[rstest]
    #[case("THIS IS A BAD COLOR HEX STRING")]
    #[case("")]
    #[case("#F00")]
    #[case("12345")]
    fn invalid_hex(#[case] input: &str) {
        assert_eq!(Color::from_hex(input), None);

        let fallback = Color::from_hex_or_default(input);
        assert_eq!(fallback, Color::TRANSPARENT);
        assert_eq!(fallback.alpha(), 0.);
    }

    #[rstest]
    #[case(1. / 255., "01")]
    #[case(0., "00")]
    #[case(1., "FF")]
    #[case(0.5, "80")]
    #[case(15. / 255., "0F")]
    fn channel_hex_is_zero_padded(#[case] input: f64, #[case] expected: &str) {
        let color = Color::from_channels(input, input, input, input);
        assert_eq!(color.red_hex(), expected);
        assert_eq!(color.green_hex(), expected);
        assert_eq!(color.blue_hex(), expected);
        assert_eq!(color.alpha_hex(), expected);
    }

    #[rstest]
    #[case([1.5, -0.5, f64::NAN, 2.], [1., 0., 0., 1.])]
    #[case([f64::INFINITY, f64::NEG_INFINITY, 0.25, 0.75], [1., 0., 0.25, 0.75])]
    fn channels_are_clamped(#[case] input: [f64; 4], #[case] expected: [f64; 4]) {
        let [r, g, b, a] = input;
        let color = Color::from_channels(r, g, b, a);
        assert_eq!(
            [color.red(), color.green(), color.blue(), color.alpha()],
            expected
        );
    }

    #[rstest]
    #[case(Color::from_channels(0.2, 0.4, 0.6, 0.8), Color::from_channels(0.8, 0.6, 0.4, 0.2))]
    #[case(Color::TRANSPARENT, Color::from_channels(1., 1., 1., 1.))]
    fn inverse(#[case] input: Color, #[case] expected: Color) {
        assert_close(input.inverse(), expected);
    }

    #[rstest]
    #[case(Color::from_channels(0.2, 0.4, 0.6, 0.8))]
    #[case(Color::from_channels(1. / 3., 0.1, 0.7, 0.3))]
    #[case(Color::from_argb(Argb::from_u32(0x1A_7B_2D_43)))]
    #[case(Color::TRANSPARENT)]
    fn inverse_is_involutive(#[case] input: Color) {
        assert_close(input.inverse().inverse(), input);
    }

    #[test]
    fn display_and_from_str() {
        let color: Color = "80F3F2F1".parse().expect("valid colour code");
        assert_eq!(color.to_string(), "80F3F2F1");
        assert_eq!("F3F2F1".parse::<Color>().map(|c| c.to_string()), Ok("FFF3F2F1".into()));
        assert_eq!("F3F2F".parse::<Color>(), Err(ParseError::InvalidLength(5)));
    }

    #[test]
    fn color_macro() {
        const ACCENT: Color = crate::color!("80F3F2F1");
        assert_eq!(ACCENT.argb_hex(), "80F3F2F1");
        assert_eq!(Some(crate::color!("f00")), Color::from_hex("FF0000"));
    }

    #[test]
    fn argb_conversions() {
        let argb = Argb::from_u32(0x80_7B_2D_43);
        assert_eq!(Argb::from(Color::from(argb)), argb);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_as_argb_string() {
        let color = Color::from_hex("80F3F2F1").expect("valid colour code");
        let json = serde_json::to_string(&color).expect("serialisable");
        assert_eq!(json, r#""80F3F2F1""#);
        assert_eq!(serde_json::from_str::<Color>(r#""F00""#).ok(), Color::from_hex("F00"));
        assert!(serde_json::from_str::<Color>(r#""nope""#).is_err());
    }
}
