use image::RgbaImage;
use serde::{Deserialize, Serialize};

use super::ImageFilter;
use crate::error::FilterError;

/// Built-in kernels offered in the filter menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KernelPreset {
    Mean5x5,
    Mean7x7,
}

/// Square convolution mask, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    size: usize,
    weights: Vec<f32>,
}

impl Kernel {
    pub fn new(size: usize, weights: Vec<f32>) -> Result<Self, FilterError> {
        if size == 0 || weights.len() != size * size {
            return Err(FilterError::InvalidArgument(format!(
                "kernel of size {size} needs {} weights, got {}",
                size * size,
                weights.len()
            )));
        }
        Ok(Self { size, weights })
    }

    /// Box blur: `size`×`size` weights of `1 / size²`
    pub fn mean(size: usize) -> Result<Self, FilterError> {
        if size == 0 {
            return Err(FilterError::InvalidArgument("mean kernel size must be at least 1".to_string()));
        }
        let n = size * size;
        Self::new(size, vec![1.0 / n as f32; n])
    }

    /// 3×3 Laplacian sharpen with strength `a`
    pub fn sharpen(a: f32) -> Self {
        Self {
            size: 3,
            weights: vec![0.0, -a, 0.0, -a, 4.0 * a + 1.0, -a, 0.0, -a, 0.0],
        }
    }

    pub fn preset(preset: KernelPreset) -> Self {
        let size = match preset {
            KernelPreset::Mean5x5 => 5,
            KernelPreset::Mean7x7 => 7,
        };
        let n = size * size;
        Self {
            size,
            weights: vec![1.0 / n as f32; n],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Offset of the kernel's anchor cell from its top-left corner
    fn origin(&self) -> usize {
        (self.size - 1) / 2
    }
}

/// Convolves the colour channels with a [`Kernel`].
///
/// Pixels too close to the border for the whole kernel to fit are set to
/// black; their alpha is kept.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvolveFilter {
    kernel: Kernel,
}

impl ConvolveFilter {
    pub fn new(kernel: Kernel) -> Self {
        Self { kernel }
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }
}

impl ImageFilter for ConvolveFilter {
    fn name(&self) -> &'static str {
        "convolve"
    }

    fn filter(&self, src: &RgbaImage) -> RgbaImage {
        let (w, h) = (src.width() as usize, src.height() as usize);
        let size = self.kernel.size;
        let origin = self.kernel.origin();
        let tail = size - 1 - origin;

        let mut out = src.clone();
        for y in 0..h {
            for x in 0..w {
                let px = out.get_pixel_mut(x as u32, y as u32);
                if x < origin || y < origin || x + tail >= w || y + tail >= h {
                    px[0] = 0;
                    px[1] = 0;
                    px[2] = 0;
                    continue;
                }

                let mut acc = [0.0f32; 3];
                for ky in 0..size {
                    for kx in 0..size {
                        let weight = self.kernel.weights[ky * size + kx];
                        let sp = src.get_pixel((x + kx - origin) as u32, (y + ky - origin) as u32);
                        for (sum, &sample) in acc.iter_mut().zip(&sp.0[..3]) {
                            *sum += weight * sample as f32;
                        }
                    }
                }
                for (channel, sum) in acc.into_iter().enumerate() {
                    px[channel] = sum.round().clamp(0.0, 255.0) as u8;
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_weights_sum_to_one() {
        let kernel = Kernel::mean(5).unwrap();
        let total: f32 = kernel.weights().iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert_eq!(Kernel::preset(KernelPreset::Mean7x7).size(), 7);
    }

    #[test]
    fn test_invalid_kernels_rejected() {
        assert!(Kernel::mean(0).is_err());
        assert!(Kernel::new(3, vec![1.0; 8]).is_err());
    }

    #[test]
    fn test_sharpen_centre_weight() {
        let kernel = Kernel::sharpen(1.0);
        assert_eq!(kernel.weights()[4], 5.0);
        assert_eq!(kernel.weights()[1], -1.0);
    }
}
