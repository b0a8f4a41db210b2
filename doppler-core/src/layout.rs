use serde::{Deserialize, Serialize};

/// Placement of the square star canvas, in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasLayout {
    /// Width and height of the canvas
    pub size: f64,
    /// Left offset, matching the detail image
    pub left: f64,
}

/// Fit the canvas over the detail image.
///
/// The star asset is square, so the canvas takes the image's rendered height
/// for both sides. Negative or NaN heights collapse to 0.
pub fn fit_canvas(detail_height: f64, detail_left: f64) -> CanvasLayout {
    let size = if detail_height.is_nan() {
        0.0
    } else {
        detail_height.max(0.0)
    };
    let left = if detail_left.is_finite() {
        detail_left
    } else {
        0.0
    };
    CanvasLayout { size, left }
}
