//! Layer opacities derived from velocity.
//!
//! Negative velocity fades in the blue silhouette and strengthens the detail
//! layer. Positive velocity fades in the red silhouette up to a plateau at
//! `+divisor * default_opacity`, while detail stays at the default.

use crate::config::DOPPLER_CONFIG;
use crate::recolor::ShiftColor;
use serde::{Deserialize, Serialize};

/// Opacity parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OpacityCurve {
    /// Full color strength and resting detail opacity
    pub default_opacity: f64,
    /// Velocity units per unit of opacity
    pub divisor: f64,
}

/// Opacities for the blue, red and detail (gold) layers, each in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OpacityTriple {
    pub blue: f64,
    pub red: f64,
    pub detail: f64,
}

impl OpacityTriple {
    /// Opacity of the layer showing the given color variant
    pub fn shift(&self, color: ShiftColor) -> f64 {
        match color {
            ShiftColor::Blue => self.blue,
            ShiftColor::Red => self.red,
        }
    }
}

impl OpacityCurve {
    /// Layer opacities for a velocity in the clamped domain.
    pub fn compute(&self, velocity: f64) -> OpacityTriple {
        if velocity < 0.0 {
            let blue = velocity.abs() / self.divisor;
            OpacityTriple {
                blue,
                red: 0.0,
                detail: blue + self.default_opacity,
            }
        } else if velocity > 0.0 {
            let red = (velocity / self.divisor).min(self.default_opacity);
            OpacityTriple {
                blue: 0.0,
                red,
                detail: self.default_opacity,
            }
        } else {
            self.resting()
        }
    }

    /// Opacities at velocity 0
    pub fn resting(&self) -> OpacityTriple {
        OpacityTriple {
            blue: 0.0,
            red: 0.0,
            detail: self.default_opacity,
        }
    }
}

/// [`OpacityCurve::compute`] with the demo configuration.
pub fn compute_opacities(velocity: f64) -> OpacityTriple {
    DOPPLER_CONFIG.opacity.compute(velocity)
}
