use tint::{Color, Fallback};

/// Strips non-alphanumeric characters from both ends of `s`.
///
/// Characters in the middle are kept, so `"#FF 00 00"` still fails to parse
/// after trimming.
#[must_use]
pub fn trim_non_alphanumeric(s: &str) -> &str {
    s.trim_matches(|c: char| !c.is_alphanumeric())
}

pub trait ToColor {
    fn to_color_with(&self, fallback: Fallback) -> Option<Color>;

    fn to_color(&self) -> Option<Color> {
        self.to_color_with(Fallback::Absent)
    }
}

impl ToColor for str {
    fn to_color_with(&self, fallback: Fallback) -> Option<Color> {
        Color::from_hex_with(trim_non_alphanumeric(self), fallback)
    }
}
