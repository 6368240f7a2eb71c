//! Whole-image pixel filters applied to the canvas raster.
//!
//! Filters are pure: they read a source [`RgbaImage`] and return a new one of
//! the same size. Every filter leaves the alpha channel untouched.

mod kernel;
mod lookup;
mod pop_art;
mod posterize;
mod red;
mod tone;

pub use kernel::{ConvolveFilter, Kernel, KernelPreset};
pub use lookup::{LookupFilter, LookupTable};
pub use pop_art::PopArt;
pub use posterize::Posterize;
pub use red::RedIsolation;
pub use tone::ToneShift;

use image::RgbaImage;

use crate::error::FilterError;

pub trait ImageFilter {
    /// Short name used in logs and menus
    fn name(&self) -> &'static str;

    /// Produce the filtered copy of `src`
    fn filter(&self, src: &RgbaImage) -> RgbaImage;

    /// Filter an optional raster, rejecting a missing or empty one
    fn apply(&self, src: Option<&RgbaImage>) -> Result<RgbaImage, FilterError> {
        match src {
            Some(img) if img.width() > 0 && img.height() > 0 => Ok(self.filter(img)),
            _ => Err(FilterError::MissingSource),
        }
    }
}

/// Copy `src`, replacing each pixel's RGB with `f(rgb)`; alpha is kept
pub(crate) fn map_rgb(src: &RgbaImage, f: impl Fn([u8; 3]) -> [u8; 3]) -> RgbaImage {
    let mut out = src.clone();
    for px in out.pixels_mut() {
        let [r, g, b] = f([px[0], px[1], px[2]]);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
    out
}

/// Integer mean of the three colour channels
pub(crate) fn rgb_mean([r, g, b]: [u8; 3]) -> u8 {
    ((r as u16 + g as u16 + b as u16) / 3) as u8
}
