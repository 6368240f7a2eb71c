use egui::Color32;
use image::RgbaImage;

use super::{ImageFilter, map_rgb};
use crate::error::FilterError;

/// Rotates the hue of pixels whose hue is close to a reference colour's.
///
/// Hues are compared on the colour wheel in degrees, so 350° and 10° are 20°
/// apart. Saturation and brightness are left as they were.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneShift {
    reference_hue: f32,
    threshold: f32,
    shift: f32,
}

impl ToneShift {
    pub fn new(color: Color32, threshold: f32, shift: f32) -> Result<Self, FilterError> {
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(FilterError::InvalidArgument(format!(
                "hue threshold must be a non-negative angle, got {threshold}"
            )));
        }
        if !shift.is_finite() {
            return Err(FilterError::InvalidArgument("hue shift must be finite".to_string()));
        }
        let [h, _, _] = rgb_to_hsb([color.r(), color.g(), color.b()]);
        Ok(Self {
            reference_hue: h * 360.0,
            threshold,
            shift,
        })
    }

    fn shift_pixel(&self, rgb: [u8; 3]) -> [u8; 3] {
        let [h, s, b] = rgb_to_hsb(rgb);
        let hue = h * 360.0;
        let mut distance = (hue - self.reference_hue).abs();
        if distance > 180.0 {
            distance = 360.0 - distance;
        }
        if distance > self.threshold {
            return rgb;
        }
        let shifted = (hue + self.shift).rem_euclid(360.0);
        hsb_to_rgb([shifted / 360.0, s, b])
    }
}

impl ImageFilter for ToneShift {
    fn name(&self) -> &'static str {
        "tone shift"
    }

    fn filter(&self, src: &RgbaImage) -> RgbaImage {
        map_rgb(src, |rgb| self.shift_pixel(rgb))
    }
}

/// Hue, saturation and brightness, each in `0.0..=1.0`
fn rgb_to_hsb([r, g, b]: [u8; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let brightness = max as f32 / 255.0;
    if max == 0 || max == min {
        return [0.0, 0.0, brightness];
    }

    let range = (max - min) as f32;
    let saturation = range / max as f32;
    let rc = (max - r) as f32 / range;
    let gc = (max - g) as f32 / range;
    let bc = (max - b) as f32 / range;
    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    let mut hue = sector / 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }
    [hue, saturation, brightness]
}

fn hsb_to_rgb([h, s, v]: [f32; 3]) -> [u8; 3] {
    let channel = |x: f32| (x * 255.0 + 0.5) as u8;
    if s == 0.0 {
        return [channel(v); 3];
    }

    let sector = (h - h.floor()) * 6.0;
    let f = sector - sector.floor();
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    let (r, g, b) = match sector as u32 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    [channel(r), channel(g), channel(b)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsb_primaries() {
        assert_eq!(rgb_to_hsb([255, 0, 0]), [0.0, 1.0, 1.0]);
        let [h, _, _] = rgb_to_hsb([0, 255, 0]);
        assert!((h * 360.0 - 120.0).abs() < 1e-3);
        assert_eq!(hsb_to_rgb([0.0, 1.0, 1.0]), [255, 0, 0]);
        assert_eq!(hsb_to_rgb([0.5, 0.0, 0.5]), [128, 128, 128]);
    }

    #[test]
    fn test_red_rotated_to_green() {
        let shift = ToneShift::new(Color32::RED, 10.0, 120.0).unwrap();
        assert_eq!(shift.shift_pixel([255, 0, 0]), [0, 255, 0]);
        // blue is 120 degrees away from red
        assert_eq!(shift.shift_pixel([0, 0, 255]), [0, 0, 255]);
    }

    #[test]
    fn test_distance_wraps_around_the_wheel() {
        // hue of (255, 0, 40) is about 350.6 degrees
        let shift = ToneShift::new(Color32::RED, 15.0, 180.0).unwrap();
        assert_ne!(shift.shift_pixel([255, 0, 40]), [255, 0, 40]);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        assert!(ToneShift::new(Color32::RED, -1.0, 30.0).is_err());
    }
}
