//! DOM-backed collaborators for [`DopplerController`].

use doppler_core::{
    CanvasLayout, DopplerController, LayoutTarget, OpacityTriple, OverlayLayers, SliderControl,
    VelocityField,
};
use leptos::*;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlInputElement};

/// Controller wired to the live page.
pub type DomController = DopplerController<DomField, DomSlider, SignalOverlays, DomLayout>;

/// The `<input type="number">` velocity field.
pub struct DomField(HtmlInputElement);

impl DomField {
    pub fn new(input: HtmlInputElement) -> Self {
        Self(input)
    }
}

impl VelocityField for DomField {
    fn value(&self) -> String {
        self.0.value()
    }

    fn set_value(&self, text: &str) {
        self.0.set_value(text);
    }
}

/// The `<input type="range">` log-scale slider.
pub struct DomSlider(HtmlInputElement);

impl DomSlider {
    /// Wrap a range input. The step is set to `any`; the default step of 1
    /// would snap positions on a track that is only ~9.2 units long.
    pub fn new(input: HtmlInputElement) -> Self {
        input.set_step("any");
        Self(input)
    }
}

impl SliderControl for DomSlider {
    fn value(&self) -> f64 {
        let v = self.0.value_as_number();
        if v.is_nan() {
            self.0.value().parse().unwrap_or(0.0)
        } else {
            v
        }
    }

    fn set_value(&self, position: f64) {
        self.0.set_value(&position.to_string());
    }

    fn set_bounds(&self, min: f64, max: f64) {
        self.0.set_min(&min.to_string());
        self.0.set_max(&max.to_string());
    }
}

/// Overlay opacities published through a signal the star images read from.
pub struct SignalOverlays(WriteSignal<OpacityTriple>);

impl SignalOverlays {
    pub fn new(set_opacities: WriteSignal<OpacityTriple>) -> Self {
        Self(set_opacities)
    }
}

impl OverlayLayers for SignalOverlays {
    fn apply(&self, opacities: &OpacityTriple) {
        self.0.set(*opacities);
    }
}

/// Star canvas placed over the detail (gold) image.
pub struct DomLayout {
    canvas: HtmlCanvasElement,
    detail: HtmlElement,
}

impl DomLayout {
    pub fn new(canvas: HtmlCanvasElement, detail: HtmlElement) -> Self {
        Self { canvas, detail }
    }
}

impl LayoutTarget for DomLayout {
    fn detail_height(&self) -> f64 {
        self.detail.offset_height() as f64
    }

    fn detail_left(&self) -> f64 {
        self.detail.offset_left() as f64
    }

    fn place_canvas(&self, layout: &CanvasLayout) {
        let style = self.canvas.style();
        let size = format!("{}px", layout.size);
        let left = format!("{}px", layout.left);
        for (property, value) in [("width", &size), ("height", &size), ("left", &left)] {
            if let Err(e) = style.set_property(property, value) {
                log::warn!("Failed to set canvas {}: {:?}", property, e);
            }
        }
    }
}
