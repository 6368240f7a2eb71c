use image::RgbaImage;

use super::{ImageFilter, map_rgb, rgb_mean};

/// Keeps strongly red pixels and greys out everything else
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedIsolation {
    pub threshold: i32,
}

impl RedIsolation {
    pub fn new(threshold: i32) -> Self {
        Self { threshold }
    }

    fn is_red(&self, [r, g, b]: [u8; 3]) -> bool {
        r as i32 - g as i32 - b as i32 > self.threshold
    }
}

impl ImageFilter for RedIsolation {
    fn name(&self) -> &'static str {
        "red isolation"
    }

    fn filter(&self, src: &RgbaImage) -> RgbaImage {
        map_rgb(src, |rgb| {
            if self.is_red(rgb) {
                rgb
            } else {
                [rgb_mean(rgb); 3]
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_strict() {
        let red = RedIsolation::new(20);
        assert!(red.is_red([200, 50, 50]));
        assert!(!red.is_red([120, 50, 50]));
        assert!(red.is_red([121, 50, 50]));
        assert!(!red.is_red([255, 200, 100]));
    }
}
