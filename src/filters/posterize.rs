use image::RgbaImage;

use super::{ImageFilter, map_rgb};
use crate::error::FilterError;

/// Reduces each colour channel to `levels` evenly spaced values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posterize {
    levels: u32,
}

impl Posterize {
    pub fn new(levels: u32) -> Result<Self, FilterError> {
        if levels == 0 {
            return Err(FilterError::InvalidArgument(
                "posterize needs at least one level".to_string(),
            ));
        }
        Ok(Self { levels })
    }

    pub fn levels(&self) -> u32 {
        self.levels
    }

    fn quantize(&self, sample: u8) -> u8 {
        let step = 256.0 / self.levels as f32;
        (step * (sample as f32 / step).trunc()) as u8
    }
}

impl ImageFilter for Posterize {
    fn name(&self) -> &'static str {
        "posterize"
    }

    fn filter(&self, src: &RgbaImage) -> RgbaImage {
        map_rgb(src, |rgb| rgb.map(|s| self.quantize(s)))
    }
}
