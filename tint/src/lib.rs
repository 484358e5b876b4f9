pub mod color;
pub mod error;
pub mod fallback;
pub mod hex;

pub use color::{Color, hsb::Hsb};
pub use error::ParseError;
pub use fallback::Fallback;
pub use hex::Argb;

/// Builds a [`Color`] from a hex literal at compile time.
///
/// Accepts the same 3, 6 and 8 digit forms as [`hex::parse`]. An invalid
/// literal fails to compile.
///
/// ```
/// const ACCENT: tint::Color = tint::color!("F3F2F1");
/// assert_eq!(ACCENT.hex(), "F3F2F1");
/// ```
#[macro_export]
macro_rules! color {
    ($hex:literal) => {
        const {
            match $crate::hex::parse($hex) {
                Ok(argb) => $crate::Color::from_argb(argb),
                Err(_) => panic!(concat!("invalid colour code: ", $hex)),
            }
        }
    };
}
