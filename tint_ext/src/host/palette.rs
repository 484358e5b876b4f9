use ::palette::Srgba;
use tint::{Argb, Color};

use super::HostColor;

impl HostColor for Srgba<f64> {
    fn from_color(color: Color) -> Self {
        Self::new(color.red(), color.green(), color.blue(), color.alpha())
    }

    fn to_color(&self) -> Color {
        Color::from_channels(self.red, self.green, self.blue, self.alpha)
    }
}

impl HostColor for Srgba<u8> {
    fn from_color(color: Color) -> Self {
        let Argb {
            alpha,
            red,
            green,
            blue,
        } = color.to_argb();
        Self::new(red, green, blue, alpha)
    }

    fn to_color(&self) -> Color {
        Color::from_argb(Argb {
            alpha: self.alpha,
            red: self.red,
            green: self.green,
            blue: self.blue,
        })
    }
}
