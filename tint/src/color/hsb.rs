use super::{Color, clamp_channel};

/// Hue, saturation and brightness, each in `0.0..=1.0`.
///
/// Hue is a fraction of a full turn, so `0.5` is 180°.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Color {
    /// Builds a colour from hue, saturation and brightness.
    ///
    /// Hue wraps around, so `1.25` is the same hue as `0.25`, and a non-finite
    /// hue gives a grey. The other components are clamped like
    /// [`Color::from_channels`] does.
    #[must_use]
    pub fn from_hsb(hue: f64, saturation: f64, brightness: f64, alpha: f64) -> Self {
        let saturation = clamp_channel(saturation);
        let brightness = clamp_channel(brightness);
        if saturation == 0. || !hue.is_finite() {
            return Self::from_channels(brightness, brightness, brightness, alpha);
        }

        let sector = (hue.rem_euclid(1.) * 6.) % 6.;
        let offset = sector - sector.floor();
        let p = brightness * (1. - saturation);
        let q = brightness * saturation.mul_add(-offset, 1.);
        let t = brightness * saturation.mul_add(offset - 1., 1.);

        let (red, green, blue) = match sector.floor() as u8 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::from_channels(red, green, blue, alpha)
    }

    #[must_use]
    #[expect(clippy::float_cmp)]
    pub fn hsb(&self) -> Hsb {
        let (r, g, b) = (self.red, self.green, self.blue);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let saturation = if max == 0. { 0. } else { delta / max };

        // ties resolve red, then green, then blue
        let hue = if delta == 0. {
            0.
        } else if max == r {
            60_f64.mul_add((g - b) / delta, 360.).rem_euclid(360.) / 360.
        } else if max == g {
            60_f64.mul_add((b - r) / delta, 120.) / 360.
        } else {
            60_f64.mul_add((r - g) / delta, 240.) / 360.
        };

        Hsb {
            hue,
            saturation,
            brightness: max,
        }
    }

    #[must_use]
    pub fn hue(&self) -> f64 {
        self.hsb().hue
    }

    #[must_use]
    pub fn saturation(&self) -> f64 {
        self.hsb().saturation
    }

    #[must_use]
    pub fn brightness(&self) -> f64 {
        self.hsb().brightness
    }
}
