use image::RgbaImage;

use super::{ImageFilter, map_rgb};

/// Byte-to-byte mapping for the colour channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupTable {
    /// One curve for all three channels
    Shared([u8; 256]),
    /// Separate red, green and blue curves
    PerBand([[u8; 256]; 3]),
}

impl LookupTable {
    pub fn from_fn(f: impl Fn(u8) -> u8) -> Self {
        Self::Shared(std::array::from_fn(|i| f(i as u8)))
    }

    /// Piecewise-linear curve through `(0, a)`, `(128, b)` and `(255, c)`,
    /// clamped to the byte range
    pub fn abc(a: i32, b: i32, c: i32) -> Self {
        Self::Shared(std::array::from_fn(|x| {
            let y = if x < 128 {
                ((b - a) as f64 * (x as f64 / 128.0) + a as f64) as i32
            } else {
                ((c - b) as f64 * ((x - 128) as f64 / 127.0) + b as f64) as i32
            };
            y.clamp(0, 255) as u8
        }))
    }

    /// Warm brown tint, one curve per channel
    pub fn sepia() -> Self {
        let curve = |weights: [f64; 3]| -> [u8; 256] {
            std::array::from_fn(|i| {
                let mixed: f64 = weights.iter().map(|w| i as f64 * w).sum();
                (mixed as u32).min(255) as u8
            })
        };
        Self::PerBand([
            curve([0.393, 0.769, 0.189]),
            curve([0.349, 0.686, 0.168]),
            curve([0.272, 0.534, 0.131]),
        ])
    }

    pub fn lookup(&self, band: usize, value: u8) -> u8 {
        match self {
            LookupTable::Shared(curve) => curve[value as usize],
            LookupTable::PerBand(curves) => curves[band.min(2)][value as usize],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupFilter {
    table: LookupTable,
}

impl LookupFilter {
    pub fn new(table: LookupTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &LookupTable {
        &self.table
    }
}

impl ImageFilter for LookupFilter {
    fn name(&self) -> &'static str {
        "lookup"
    }

    fn filter(&self, src: &RgbaImage) -> RgbaImage {
        map_rgb(src, |[r, g, b]| {
            [
                self.table.lookup(0, r),
                self.table.lookup(1, g),
                self.table.lookup(2, b),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abc_passes_through_control_points() {
        let table = LookupTable::abc(20, 100, 230);
        assert_eq!(table.lookup(0, 0), 20);
        assert_eq!(table.lookup(1, 128), 100);
        assert_eq!(table.lookup(2, 255), 230);
        assert_eq!(table.lookup(0, 64), 60);
    }

    #[test]
    fn test_abc_clamps() {
        let table = LookupTable::abc(-50, 128, 400);
        assert_eq!(table.lookup(0, 0), 0);
        assert_eq!(table.lookup(0, 255), 255);
    }

    #[test]
    fn test_sepia_saturates_bright_channels() {
        let table = LookupTable::sepia();
        assert_eq!(table.lookup(0, 255), 255);
        assert_eq!(table.lookup(2, 100), 93);
        assert_eq!(table.lookup(0, 0), 0);
    }
}
