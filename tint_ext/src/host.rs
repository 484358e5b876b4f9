#[cfg(feature = "image")]
mod image;
#[cfg(feature = "palette")]
mod palette;

use tint::{Argb, Color};

/// A colour type owned by some host framework that can stand in for [`Color`].
pub trait HostColor: Sized {
    fn from_color(color: Color) -> Self;
    fn to_color(&self) -> Color;
}

pub trait ColorExt {
    fn to_host<H: HostColor>(&self) -> H;
}

impl ColorExt for Color {
    fn to_host<H: HostColor>(&self) -> H {
        H::from_color(*self)
    }
}

/// Packed `0xAARRGGBB`.
impl HostColor for u32 {
    fn from_color(color: Color) -> Self {
        color.to_argb().to_u32()
    }

    fn to_color(&self) -> Color {
        Color::from_argb(Argb::from_u32(*self))
    }
}
