//! Colour types for the Pixelrun pixel model
//!
//! The editor exchanges pixels as a single packed 32-bit integer,
//! `0xRRGGBBAA`. [`Rgba`] is the structured form of that integer;
//! [`Hsla`] is the colour-picker representation.

/// One pixel's channels, the structured form of the packed `0xRRGGBBAA`
/// integer exchanged with the frame buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Packs the channels into `(r << 24) | (g << 16) | (b << 8) | a`
    pub fn pack(self) -> u32 {
        (u32::from(self.r) << 24)
            | (u32::from(self.g) << 16)
            | (u32::from(self.b) << 8)
            | u32::from(self.a)
    }

    /// Unpacks a `0xRRGGBBAA` integer into channels
    pub fn unpack(colour: u32) -> Self {
        Self {
            r: (colour >> 24) as u8,
            g: (colour >> 16) as u8,
            b: (colour >> 8) as u8,
            a: colour as u8,
        }
    }
}

/// A colour in HSLA space: hue in degrees, saturation/lightness/alpha
/// as integer percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsla {
    /// Hue in `[0, 360)` degrees
    pub h: u16,
    /// Saturation percentage in `[0, 100]`
    pub s: u8,
    /// Lightness percentage in `[0, 100]`
    pub l: u8,
    /// Alpha percentage in `[0, 100]`
    pub a: u8,
}

/// Converts a packed RGBA colour to HSLA
// https://www.niwa.nu/2013/05/math-behind-colorspace-conversions-rgb-hsl/
pub fn rgba_to_hsla(colour: u32) -> Hsla {
    let rgba = Rgba::unpack(colour);
    let alpha = (f64::from(rgba.a) / 255.0 * 100.0).round() as u8;

    let red = f64::from(rgba.r) / 255.0;
    let green = f64::from(rgba.g) / 255.0;
    let blue = f64::from(rgba.b) / 255.0;

    let min = red.min(green).min(blue);
    let max = red.max(green).max(blue);
    let delta = max - min;

    let mut hue = if delta == 0.0 {
        0.0
    } else if red == max {
        ((green - blue) / delta) % 6.0
    } else if green == max {
        (blue - red) / delta + 2.0
    } else {
        (red - green) / delta + 4.0
    };

    hue = (hue * 60.0).round();
    if hue < 0.0 {
        hue += 360.0;
    }

    let lightness = (min + max) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    Hsla {
        h: hue as u16,
        s: (saturation * 100.0).round() as u8,
        l: (lightness * 100.0).round() as u8,
        a: alpha,
    }
}

/// Converts an HSLA colour to the packed RGBA form
// https://css-tricks.com/converting-color-spaces-in-javascript/
pub fn hsla_to_rgba(hsla: Hsla) -> u32 {
    let hue = f64::from(hsla.h);
    let saturation = f64::from(hsla.s) / 100.0;
    let lightness = f64::from(hsla.l) / 100.0;

    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = lightness - c / 2.0;

    let (r, g, b) = match hsla.h {
        0..=59 => (c, x, 0.0),
        60..=119 => (x, c, 0.0),
        120..=179 => (0.0, c, x),
        180..=239 => (0.0, x, c),
        240..=299 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let rgba = Rgba {
        r: ((r + m) * 255.0).round() as u8,
        g: ((g + m) * 255.0).round() as u8,
        b: ((b + m) * 255.0).round() as u8,
        // Alpha truncates rather than rounds, matching the editor's
        // picker behaviour.
        a: (f64::from(hsla.a) / 100.0 * 255.0) as u8,
    };
    rgba.pack()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_unpack_round_trip() {
        for &colour in &[0x00000000, 0xFF0000FF, 0x00FF00FF, 0x0000FFFF, 0x12345678] {
            assert_eq!(Rgba::unpack(colour).pack(), colour);
        }
    }

    #[test]
    fn test_unpack_channel_order() {
        let rgba = Rgba::unpack(0x11223344);
        assert_eq!(
            rgba,
            Rgba {
                r: 0x11,
                g: 0x22,
                b: 0x33,
                a: 0x44
            }
        );
    }

    #[test]
    fn test_primary_colours_to_hsla() {
        assert_eq!(
            rgba_to_hsla(0xFF0000FF),
            Hsla {
                h: 0,
                s: 100,
                l: 50,
                a: 100
            }
        );
        assert_eq!(
            rgba_to_hsla(0x00FF00FF),
            Hsla {
                h: 120,
                s: 100,
                l: 50,
                a: 100
            }
        );
        assert_eq!(
            rgba_to_hsla(0x0000FFFF),
            Hsla {
                h: 240,
                s: 100,
                l: 50,
                a: 100
            }
        );
    }

    #[test]
    fn test_greys_have_no_hue_or_saturation() {
        let hsla = rgba_to_hsla(0x808080FF);
        assert_eq!(hsla.h, 0);
        assert_eq!(hsla.s, 0);
        assert_eq!(hsla.l, 50);

        assert_eq!(
            rgba_to_hsla(0xFFFFFFFF),
            Hsla {
                h: 0,
                s: 0,
                l: 100,
                a: 100
            }
        );
    }

    #[test]
    fn test_hsla_to_rgba_primaries() {
        assert_eq!(
            hsla_to_rgba(Hsla {
                h: 0,
                s: 100,
                l: 50,
                a: 100
            }),
            0xFF0000FF
        );
        assert_eq!(
            hsla_to_rgba(Hsla {
                h: 120,
                s: 100,
                l: 50,
                a: 100
            }),
            0x00FF00FF
        );
        assert_eq!(
            hsla_to_rgba(Hsla {
                h: 240,
                s: 100,
                l: 50,
                a: 100
            }),
            0x0000FFFF
        );
        assert_eq!(
            hsla_to_rgba(Hsla {
                h: 0,
                s: 0,
                l: 0,
                a: 0
            }),
            0x00000000
        );
    }

    #[test]
    fn test_hsla_round_trip_for_saturated_colours() {
        for h in (0..360).step_by(30) {
            let hsla = Hsla {
                h,
                s: 100,
                l: 50,
                a: 100,
            };
            assert_eq!(rgba_to_hsla(hsla_to_rgba(hsla)), hsla);
        }
    }
}
