//! HSL to sRGB conversion.

use lumen_common::Color;

/// Convert HSL to an RGB color.
///
/// `h` is in degrees, `s` and `l` are percentages (0-100), matching the
/// textual `hsl()` notation. Hue wraps modulo 360 (negative hues included);
/// saturation and lightness clamp to [0, 100].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Color {
    let h = if h.is_finite() { h.rem_euclid(360.0) } else { 0.0 };
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r1, g1, b1) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Color::from_rgb(to_channel(r1 + m), to_channel(g1 + m), to_channel(b1 + m))
}

fn to_channel(v: f64) -> u8 {
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries() {
        assert_eq!(hsl_to_rgb(0.0, 100.0, 50.0), Color::from_rgb(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 100.0, 50.0), Color::from_rgb(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 100.0, 50.0), Color::from_rgb(0, 0, 255));
    }

    #[test]
    fn secondaries() {
        assert_eq!(hsl_to_rgb(60.0, 100.0, 50.0), Color::from_rgb(255, 255, 0));
        assert_eq!(hsl_to_rgb(180.0, 100.0, 50.0), Color::from_rgb(0, 255, 255));
        assert_eq!(hsl_to_rgb(300.0, 100.0, 50.0), Color::from_rgb(255, 0, 255));
    }

    #[test]
    fn achromatic() {
        assert_eq!(hsl_to_rgb(0.0, 0.0, 0.0), Color::BLACK);
        assert_eq!(hsl_to_rgb(0.0, 0.0, 100.0), Color::WHITE);
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(hsl_to_rgb(210.0, 0.0, 50.0), Color::from_rgb(128, 128, 128));
    }

    #[test]
    fn hue_wraps() {
        assert_eq!(hsl_to_rgb(360.0, 100.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(480.0, 100.0, 50.0), hsl_to_rgb(120.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(-120.0, 100.0, 50.0), hsl_to_rgb(240.0, 100.0, 50.0));
    }

    #[test]
    fn percentages_clamp() {
        assert_eq!(hsl_to_rgb(0.0, 150.0, 50.0), hsl_to_rgb(0.0, 100.0, 50.0));
        assert_eq!(hsl_to_rgb(0.0, 100.0, 120.0), Color::WHITE);
        assert_eq!(hsl_to_rgb(0.0, -10.0, 50.0), Color::from_rgb(128, 128, 128));
    }

    #[test]
    fn non_finite_hue_does_not_panic() {
        let c = hsl_to_rgb(f64::INFINITY, 100.0, 50.0);
        assert_eq!(c, Color::from_rgb(255, 0, 0));
    }
}
