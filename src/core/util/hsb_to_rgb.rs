use crate::core::data::colour::Colour;

fn channel(value: f32) -> u8 {
    // value is in [0, 1], so the result always fits
    (value * 255.0 + 0.5) as u8
}

/// Converts hue/saturation/brightness to an opaque RGB colour.
///
/// Hue wraps: only its fractional part is used, so `1.25` and `0.25` give the
/// same colour. Saturation and brightness are expected in `[0, 1]`. Arithmetic
/// is single precision and channels are rounded half-up, which keeps palettes
/// reproducible bit for bit.
#[must_use]
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> Colour {
    if saturation == 0.0 {
        let grey = channel(brightness);
        return Colour::opaque(grey, grey, grey);
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        _ => (0.0, 0.0, 0.0),
    };

    Colour::opaque(channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsb_to_rgb(0.0, 1.0, 1.0), Colour::opaque(255, 0, 0));
        assert_eq!(hsb_to_rgb(1.0 / 3.0, 1.0, 1.0), Colour::opaque(0, 255, 0));
        assert_eq!(hsb_to_rgb(2.0 / 3.0, 1.0, 1.0), Colour::opaque(0, 0, 255));
    }

    #[test]
    fn test_zero_brightness_is_black() {
        assert_eq!(hsb_to_rgb(0.4, 1.0, 0.0), Colour::OPAQUE_BLACK);
    }

    #[test]
    fn test_zero_saturation_is_grey() {
        assert_eq!(hsb_to_rgb(0.7, 0.0, 0.5), Colour::opaque(128, 128, 128));
    }

    #[test]
    fn test_hue_wraps_past_one() {
        assert_eq!(hsb_to_rgb(1.5, 1.0, 1.0), hsb_to_rgb(0.5, 1.0, 1.0));
        assert_eq!(hsb_to_rgb(0.5, 1.0, 1.0), Colour::opaque(0, 255, 255));
    }

    #[test]
    fn test_secondary_hue_sector() {
        // hue 1/12 sits halfway between red and yellow
        assert_eq!(hsb_to_rgb(1.0 / 12.0, 1.0, 1.0), Colour::opaque(255, 128, 0));
    }

    #[test]
    fn test_output_is_always_opaque() {
        for step in 0..24 {
            let colour = hsb_to_rgb(step as f32 / 24.0, 0.8, 0.6);
            assert_eq!(colour.a, 255);
        }
    }
}
