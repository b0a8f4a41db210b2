use doppler_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared page state the fake elements write into
#[derive(Default)]
struct Page {
    field: RefCell<String>,
    slider: Cell<f64>,
    slider_bounds: Cell<(f64, f64)>,
    opacities: Cell<Option<OpacityTriple>>,
    canvas: Cell<Option<CanvasLayout>>,
    image_height: Cell<f64>,
}

struct FakeField(Rc<Page>);
struct FakeSlider(Rc<Page>);
struct FakeLayers(Rc<Page>);
struct FakeLayout(Rc<Page>);

impl VelocityField for FakeField {
    fn value(&self) -> String {
        self.0.field.borrow().clone()
    }
    fn set_value(&self, text: &str) {
        *self.0.field.borrow_mut() = text.to_string();
    }
}

impl SliderControl for FakeSlider {
    fn value(&self) -> f64 {
        self.0.slider.get()
    }
    fn set_value(&self, position: f64) {
        // Range inputs clamp to their bounds
        let (min, max) = self.0.slider_bounds.get();
        self.0.slider.set(position.clamp(min, max));
    }
    fn set_bounds(&self, min: f64, max: f64) {
        self.0.slider_bounds.set((min, max));
    }
}

impl OverlayLayers for FakeLayers {
    fn apply(&self, opacities: &OpacityTriple) {
        self.0.opacities.set(Some(*opacities));
    }
}

impl LayoutTarget for FakeLayout {
    fn detail_height(&self) -> f64 {
        self.0.image_height.get()
    }
    fn detail_left(&self) -> f64 {
        24.0
    }
    fn place_canvas(&self, layout: &CanvasLayout) {
        self.0.canvas.set(Some(*layout));
    }
}

type Controller = DopplerController<FakeField, FakeSlider, FakeLayers, FakeLayout>;

fn setup() -> (Rc<Page>, Controller) {
    let page = Rc::new(Page::default());
    page.image_height.set(420.0);
    let mut controller = DopplerController::new(
        FakeField(Rc::clone(&page)),
        FakeSlider(Rc::clone(&page)),
        FakeLayers(Rc::clone(&page)),
        FakeLayout(Rc::clone(&page)),
    );
    controller.init();
    (page, controller)
}

fn type_into_field(page: &Page, controller: &mut Controller, text: &str) -> VelocityUpdate {
    *page.field.borrow_mut() = text.to_string();
    controller.handle_input_change()
}

#[test]
fn test_typing_below_minimum_shows_full_blue() {
    let (page, mut controller) = setup();

    let update = type_into_field(&page, &mut controller, "-250");

    assert_eq!(*page.field.borrow(), "-100");
    assert_eq!(
        page.opacities.get(),
        Some(OpacityTriple {
            blue: 0.5,
            red: 0.0,
            detail: 1.0
        })
    );
    assert_eq!(page.slider.get(), page.slider_bounds.get().0);
    assert_eq!(update.velocity, -100.0);
}

#[test]
fn test_typing_zero_restores_start_position() {
    let (page, mut controller) = setup();
    type_into_field(&page, &mut controller, "75");

    type_into_field(&page, &mut controller, "0");

    assert_eq!(page.slider.get(), DOPPLER_CONFIG.scale.start_position());
    assert_eq!(
        page.opacities.get(),
        Some(OpacityTriple {
            blue: 0.0,
            red: 0.0,
            detail: 0.5
        })
    );
}

#[test]
fn test_red_plateau_beyond_one_hundred() {
    let (page, mut controller) = setup();

    let at_150 = type_into_field(&page, &mut controller, "150").opacities;
    let at_5000 = type_into_field(&page, &mut controller, "5000").opacities;

    assert_eq!(at_150, at_5000);
    assert_eq!(at_150.red, 0.5);
    assert_eq!(at_150.detail, 0.5);
}

#[test]
fn test_typed_maximum_pins_slider_to_track_end() {
    let (page, mut controller) = setup();

    let update = type_into_field(&page, &mut controller, "99999");

    assert_eq!(*page.field.borrow(), "10000");
    // Forward mapping overshoots ln(10000) slightly; the control clamps it
    assert!(velocity_to_slider(10_000.0) > DOPPLER_CONFIG.scale.max_log());
    assert_eq!(page.slider.get(), DOPPLER_CONFIG.scale.max_log());
    assert_eq!(update.position, page.slider.get());
    assert_eq!(controller.position(), page.slider.get());
}

#[test]
fn test_slider_drag_updates_field_and_layers() {
    let (page, mut controller) = setup();

    page.slider.set(DOPPLER_CONFIG.scale.max_log());
    let update = controller.handle_slider_change();

    assert_eq!(*page.field.borrow(), "9899.0");
    assert_eq!(update.velocity, 9899.0);
    assert_eq!(page.opacities.get().map(|o| o.red), Some(0.5));
}

#[test]
fn test_clamped_input_property() {
    let (page, mut controller) = setup();

    for x in [-1e6_f64, -100.5, -100.0, -3.25, 0.0, 42.0, 9_999.0, 10_000.0, 10_000.1, 1e12] {
        let update = type_into_field(&page, &mut controller, &x.to_string());
        assert_eq!(update.velocity, x.clamp(-100.0, 10_000.0), "x={x}");
    }
}

#[test]
fn test_resize_tracks_detail_image() {
    let (page, controller) = setup();
    assert_eq!(
        page.canvas.get(),
        Some(CanvasLayout {
            size: 420.0,
            left: 24.0
        })
    );

    page.image_height.set(180.0);
    let layout = controller.handle_resize();

    assert_eq!(layout.size, 180.0);
    assert_eq!(page.canvas.get(), Some(layout));
}
