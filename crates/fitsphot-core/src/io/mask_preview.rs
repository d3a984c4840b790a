use std::path::Path;

use image::{GrayImage, ImageFormat, Luma};

use crate::detection::LabelMap;
use crate::error::Result;

/// Save a label map as an 8-bit grayscale PNG.
///
/// Background is black; components cycle through grey levels in 64..=255 so
/// that neighbouring objects stay distinguishable.
pub fn save_label_png(labels: &LabelMap, path: &Path) -> Result<()> {
    let (h, w) = labels.dim();

    let mut img = GrayImage::new(w as u32, h as u32);
    for row in 0..h {
        for col in 0..w {
            let lbl = labels.labels[[row, col]];
            img.put_pixel(col as u32, row as u32, Luma([label_shade(lbl)]));
        }
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn label_shade(label: u32) -> u8 {
    if label == 0 {
        return 0;
    }
    (64 + (label - 1) % 192 * 37 % 192) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_shade_range() {
        assert_eq!(label_shade(0), 0);
        for lbl in 1..1000 {
            assert!(label_shade(lbl) >= 64);
        }
        assert_ne!(label_shade(1), label_shade(2));
    }
}
