//! Silhouette recoloring.
//!
//! Replaces the color of every pixel while keeping the alpha channel, which
//! turns a shaded star with a transparent background into a flat silhouette
//! clipped to the same shape.

use crate::bitmap::{Bitmap, Rgb};
use crate::config::DOPPLER_CONFIG;
use serde::{Deserialize, Serialize};

/// The two color-shifted star variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShiftColor {
    /// Approaching source (negative velocity)
    Blue,
    /// Receding source (positive velocity)
    Red,
}

impl ShiftColor {
    pub const ALL: [ShiftColor; 2] = [ShiftColor::Blue, ShiftColor::Red];

    /// Palette entry for this variant
    pub fn rgb(self) -> Rgb {
        match self {
            ShiftColor::Blue => DOPPLER_CONFIG.blue,
            ShiftColor::Red => DOPPLER_CONFIG.red,
        }
    }
}

/// Overwrite RGB of every pixel in an RGBA buffer, leaving alpha untouched.
///
/// A trailing partial pixel (len not a multiple of 4) is left as is.
pub fn recolor_in_place(rgba: &mut [u8], color: Rgb) {
    for px in rgba.chunks_exact_mut(4) {
        px[0] = color.r;
        px[1] = color.g;
        px[2] = color.b;
    }
}

/// Produce a recolored copy of `source` with the same dimensions and alpha mask.
pub fn recolor(source: &Bitmap, color: Rgb) -> Bitmap {
    let mut out = source.clone();
    recolor_in_place(out.as_rgba_mut(), color);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Small star-ish bitmap with varied shading and alpha
    fn shaded_bitmap() -> Bitmap {
        let mut bitmap = Bitmap::new(4, 3);
        let mut alpha = 0u8;
        for y in 0..3 {
            for x in 0..4 {
                bitmap.set_pixel(x, y, [200, (x * 40) as u8, (y * 70) as u8, alpha]);
                alpha = alpha.wrapping_add(23);
            }
        }
        bitmap
    }

    #[test]
    fn recolor_red_sets_every_pixel_and_keeps_alpha() {
        let source = shaded_bitmap();
        let red = recolor(&source, ShiftColor::Red.rgb());

        for (out, src) in red.pixels().zip(source.pixels()) {
            assert_eq!(&out[..3], &[255, 0, 0]);
            assert_eq!(out[3], src[3]);
        }
    }

    #[test]
    fn recolor_touches_fully_transparent_pixels() {
        let source = Bitmap::new(2, 2);
        let blue = recolor(&source, ShiftColor::Blue.rgb());

        assert!(blue.pixels().all(|p| p == [0, 0, 255, 0]));
    }

    #[test]
    fn recolor_preserves_dimensions_and_source() {
        let source = shaded_bitmap();
        let before = source.clone();
        let out = recolor(&source, Rgb::new(1, 2, 3));

        assert_eq!((out.width(), out.height()), (4, 3));
        assert_eq!(source, before);
    }

    #[test]
    fn recolor_in_place_ignores_trailing_partial_pixel() {
        let mut buf = vec![9u8; 6];
        recolor_in_place(&mut buf, Rgb::new(255, 0, 0));

        assert_eq!(buf, vec![255, 0, 0, 9, 9, 9]);
    }

    #[test]
    fn shift_colors_map_to_palette() {
        assert_eq!(ShiftColor::Blue.rgb(), Rgb::new(0, 0, 255));
        assert_eq!(ShiftColor::Red.rgb(), Rgb::new(255, 0, 0));
    }
}
