pub mod bitmap;
pub mod config;
pub mod controller;
pub mod error;
pub mod input;
pub mod layout;
pub mod opacity;
pub mod recolor;
pub mod scale;

pub use bitmap::{Bitmap, Rgb};
pub use config::{DopplerConfig, DOPPLER_CONFIG};
pub use controller::{
    DopplerController, LayoutTarget, OverlayLayers, SliderControl, VelocityField, VelocityUpdate,
};
pub use error::DopplerError;
pub use input::{accept_velocity, format_clamped, format_velocity, parse_velocity, AcceptedVelocity};
pub use layout::{fit_canvas, CanvasLayout};
pub use opacity::{compute_opacities, OpacityCurve, OpacityTriple};
pub use recolor::{recolor, recolor_in_place, ShiftColor};
pub use scale::{slider_to_velocity, velocity_to_slider, LogScale};
