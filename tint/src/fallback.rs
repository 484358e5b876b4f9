use crate::{color::Color, error::ParseResult, hex::Argb};

/// What to produce when a colour code cannot be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Fallback {
    /// Report the failure as no colour at all.
    #[default]
    Absent,
    /// Substitute [`Color::TRANSPARENT`].
    Transparent,
}

impl Fallback {
    #[must_use]
    pub fn resolve(self, parsed: ParseResult<Argb>) -> Option<Color> {
        match (parsed, self) {
            (Ok(argb), _) => Some(Color::from_argb(argb)),
            (Err(_), Self::Absent) => None,
            (Err(error), Self::Transparent) => {
                tracing::debug!(%error, "substituting transparent colour");
                Some(Color::TRANSPARENT)
            }
        }
    }
}
