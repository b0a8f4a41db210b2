//! Doppler demo configuration.
//!
//! All fixed constants of the demo live here so the scale mapper, the opacity
//! curve and the UI draw from a single source of truth.

use crate::bitmap::Rgb;
use crate::opacity::OpacityCurve;
use crate::scale::LogScale;

/// Configuration for the Doppler star demo.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DopplerConfig {
    /// Velocity <-> slider mapping parameters
    pub scale: LogScale,
    /// Velocity -> layer opacity parameters
    pub opacity: OpacityCurve,
    /// Logical width the star asset is drawn at
    pub canvas_width: u32,
    /// Logical height the star asset is drawn at
    pub canvas_height: u32,
    /// Silhouette color for approaching (negative velocity) stars
    pub blue: Rgb,
    /// Silhouette color for receding (positive velocity) stars
    pub red: Rgb,
}

/// The canonical demo configuration.
pub static DOPPLER_CONFIG: DopplerConfig = DopplerConfig {
    scale: LogScale {
        min_input: -100.0,
        max_input: 10_000.0,
        min_pos: 1.0,
        max_pos: 10_000.0,
        offset: 101.0,
    },
    opacity: OpacityCurve {
        default_opacity: 0.5,
        divisor: 200.0,
    },
    canvas_width: 300,
    canvas_height: 150,
    blue: Rgb::new(0, 0, 255),
    red: Rgb::new(255, 0, 0),
};
