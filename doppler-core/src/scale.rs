//! Logarithmic slider scale for the velocity control.
//!
//! The numeric field stays linear while the slider moves on a log scale, which
//! spreads the short negative (blue) range over a large part of the track.
//! Velocities are shifted by `offset` so the logarithm always sees a value >= 1.

use crate::config::DOPPLER_CONFIG;

/// Velocity <-> slider position mapping parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogScale {
    /// Lowest accepted velocity
    pub min_input: f64,
    /// Highest accepted velocity
    pub max_input: f64,
    /// Lower end of the positive domain the log is applied to
    pub min_pos: f64,
    /// Upper end of the positive domain the log is applied to
    pub max_pos: f64,
    /// Shift applied to velocities before taking the log
    pub offset: f64,
}

impl LogScale {
    /// Clamp a velocity to `[min_input, max_input]`. NaN is treated as 0.
    pub fn clamp_velocity(&self, velocity: f64) -> f64 {
        let v = if velocity.is_nan() { 0.0 } else { velocity };
        v.clamp(self.min_input, self.max_input)
    }

    /// Slider track minimum (`ln(min_pos)`)
    pub fn min_log(&self) -> f64 {
        self.min_pos.ln()
    }

    /// Slider track maximum (`ln(max_pos)`)
    pub fn max_log(&self) -> f64 {
        self.max_pos.ln()
    }

    /// Log units per unit of the positive domain.
    pub fn scale(&self) -> f64 {
        (self.max_log() - self.min_log()) / (self.max_pos - self.min_pos)
    }

    /// Divisor applied to the log in the forward mapping.
    ///
    /// This is `scale + min_pos`, not `max_log - min_log`. Positions therefore
    /// do not span exactly `[min_log, max_log]`; the slider element clamps
    /// whatever overshoots.
    fn divisor(&self) -> f64 {
        self.scale() + self.min_pos
    }

    /// Map a velocity to a slider position.
    pub fn velocity_to_slider(&self, velocity: f64) -> f64 {
        let v = self.clamp_velocity(velocity);
        let adjusted = if v < 0.0 {
            self.offset - v.abs()
        } else {
            self.offset + v
        };
        (adjusted.ln() - self.min_log()) / self.divisor()
    }

    /// Map a slider position back to a velocity.
    ///
    /// Not the exact inverse of [`velocity_to_slider`](Self::velocity_to_slider):
    /// the forward divisor is not undone here.
    pub fn slider_to_velocity(&self, position: f64) -> f64 {
        let slider_val = position.exp();
        if slider_val < self.offset {
            -(self.offset - slider_val)
        } else {
            slider_val - self.offset
        }
    }

    /// Slider position for velocity 0
    pub fn start_position(&self) -> f64 {
        self.offset.ln() / self.divisor()
    }
}

/// [`LogScale::velocity_to_slider`] with the demo configuration.
pub fn velocity_to_slider(velocity: f64) -> f64 {
    DOPPLER_CONFIG.scale.velocity_to_slider(velocity)
}

/// [`LogScale::slider_to_velocity`] with the demo configuration.
pub fn slider_to_velocity(position: f64) -> f64 {
    DOPPLER_CONFIG.scale.slider_to_velocity(position)
}
