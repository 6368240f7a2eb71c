use egui::Color32;
use image::RgbaImage;

use super::{ImageFilter, map_rgb, rgb_mean};

/// Two-tone filter: pixels at or above the brightness threshold become
/// `light`, the rest `dark`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopArt {
    pub threshold: i32,
    pub light: Color32,
    pub dark: Color32,
}

impl PopArt {
    pub fn new(threshold: i32, light: Color32, dark: Color32) -> Self {
        Self { threshold, light, dark }
    }
}

impl ImageFilter for PopArt {
    fn name(&self) -> &'static str {
        "pop art"
    }

    fn filter(&self, src: &RgbaImage) -> RgbaImage {
        let light = [self.light.r(), self.light.g(), self.light.b()];
        let dark = [self.dark.r(), self.dark.g(), self.dark.b()];
        map_rgb(src, |rgb| {
            if rgb_mean(rgb) as i32 >= self.threshold { light } else { dark }
        })
    }
}
