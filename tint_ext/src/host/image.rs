use ::image::Rgba;
use tint::{Argb, Color};

use super::HostColor;

impl HostColor for Rgba<u8> {
    fn from_color(color: Color) -> Self {
        let Argb {
            alpha,
            red,
            green,
            blue,
        } = color.to_argb();
        Self([red, green, blue, alpha])
    }

    fn to_color(&self) -> Color {
        let [red, green, blue, alpha] = self.0;
        Color::from_argb(Argb {
            alpha,
            red,
            green,
            blue,
        })
    }
}
