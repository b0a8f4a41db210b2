//! Interaction controller wiring the velocity controls to the star layers.
//!
//! The controller owns no DOM handles directly. It is generic over small
//! collaborator traits so the browser can plug in real elements and tests can
//! plug in plain structs.

use crate::config::{DopplerConfig, DOPPLER_CONFIG};
use crate::input::{format_clamped, format_velocity, parse_velocity};
use crate::layout::{fit_canvas, CanvasLayout};
use crate::opacity::OpacityTriple;

/// Numeric velocity text field.
pub trait VelocityField {
    /// Current raw text
    fn value(&self) -> String;
    fn set_value(&self, text: &str);
}

/// Log-scale range control.
pub trait SliderControl {
    fn value(&self) -> f64;
    fn set_value(&self, position: f64);
    fn set_bounds(&self, min: f64, max: f64);
}

/// The blue, red and detail overlay images.
pub trait OverlayLayers {
    fn apply(&self, opacities: &OpacityTriple);
}

/// Measurements and placement for the resize handler.
pub trait LayoutTarget {
    /// Rendered height of the detail image
    fn detail_height(&self) -> f64;
    /// Left offset of the detail image within its container
    fn detail_left(&self) -> f64;
    fn place_canvas(&self, layout: &CanvasLayout);
}

/// Outcome of one handled control edit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityUpdate {
    pub velocity: f64,
    pub position: f64,
    pub opacities: OpacityTriple,
}

/// Keeps the numeric field, the slider and the overlay opacities in sync.
pub struct DopplerController<F, S, O, L> {
    field: F,
    slider: S,
    overlays: O,
    layout: L,
    config: DopplerConfig,
    velocity: f64,
    position: f64,
}

impl<F, S, O, L> DopplerController<F, S, O, L>
where
    F: VelocityField,
    S: SliderControl,
    O: OverlayLayers,
    L: LayoutTarget,
{
    /// Create a controller using the demo configuration.
    ///
    /// Call [`init`](Self::init) once the elements are attached.
    pub fn new(field: F, slider: S, overlays: O, layout: L) -> Self {
        Self::with_config(field, slider, overlays, layout, DOPPLER_CONFIG)
    }

    pub fn with_config(field: F, slider: S, overlays: O, layout: L, config: DopplerConfig) -> Self {
        let position = config.scale.start_position();
        Self {
            field,
            slider,
            overlays,
            layout,
            config,
            velocity: 0.0,
            position,
        }
    }

    /// Set slider bounds and start position, apply resting opacities and lay
    /// out the canvas once.
    pub fn init(&mut self) {
        let scale = self.config.scale;
        self.slider.set_bounds(scale.min_log(), scale.max_log());

        self.velocity = 0.0;
        self.slider.set_value(scale.start_position());
        self.position = self.slider.value();
        self.overlays.apply(&self.config.opacity.resting());

        self.handle_resize();
        log::debug!(
            "Controller initialised: slider [{:.5}, {:.5}], start {:.5}",
            scale.min_log(),
            scale.max_log(),
            self.position
        );
    }

    /// Handle an edit of the numeric field.
    pub fn handle_input_change(&mut self) -> VelocityUpdate {
        let raw = self.field.value();
        let accepted = self.config.scale.accept(&raw);

        if accepted.clamped {
            log::warn!(
                "Velocity {:?} outside [{}, {}], clamped to {}",
                raw,
                self.config.scale.min_input,
                self.config.scale.max_input,
                accepted.velocity
            );
            self.field.set_value(&format_clamped(accepted.velocity));
        }

        // The control clamps to its bounds; keep what it actually holds
        self.slider
            .set_value(self.config.scale.velocity_to_slider(accepted.velocity));
        self.position = self.slider.value();

        self.apply_velocity(accepted.velocity)
    }

    /// Handle a drag of the slider.
    pub fn handle_slider_change(&mut self) -> VelocityUpdate {
        self.position = self.slider.value();
        let velocity = self.config.scale.slider_to_velocity(self.position);

        let text = format_velocity(velocity);
        self.field.set_value(&text);

        // Opacities follow the value the user sees, not the unrounded one
        let displayed = self.config.scale.clamp_velocity(parse_velocity(&text));
        self.apply_velocity(displayed)
    }

    /// Re-fit the canvas over the detail image.
    pub fn handle_resize(&self) -> CanvasLayout {
        let layout = fit_canvas(self.layout.detail_height(), self.layout.detail_left());
        self.layout.place_canvas(&layout);
        layout
    }

    /// Last applied velocity
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Slider position as last held by the control
    pub fn position(&self) -> f64 {
        self.position
    }

    fn apply_velocity(&mut self, velocity: f64) -> VelocityUpdate {
        self.velocity = velocity;
        let opacities = self.config.opacity.compute(velocity);
        self.overlays.apply(&opacities);

        log::debug!(
            "velocity={} position={:.5} opacities={:?}",
            velocity,
            self.position,
            opacities
        );

        VelocityUpdate {
            velocity,
            position: self.position,
            opacities,
        }
    }
}
