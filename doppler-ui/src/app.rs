use crate::bindings::{DomController, DomField, DomLayout, DomSlider, SignalOverlays};
use crate::components::{StarDisplay, VelocityControls};
use crate::config::STAR_IMAGE_SRC;
use crate::hooks::use_window_resize;
use crate::rendering::{load_image, render_star_variants, StarVariants};
use doppler_core::DOPPLER_CONFIG;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, HtmlElement, HtmlInputElement};

#[component]
pub fn App() -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let gold_ref = create_node_ref::<html::Img>();
    let input_ref = create_node_ref::<html::Input>();
    let slider_ref = create_node_ref::<html::Input>();

    let (opacities, set_opacities) = create_signal(DOPPLER_CONFIG.opacity.resting());
    let (variants, set_variants) = create_signal(None::<StarVariants>);

    // Built once every element is mounted
    let controller = store_value(None::<DomController>);

    // ========== Effect: wire controller and render variants ==========
    create_effect(move |_| {
        let (Some(canvas), Some(gold), Some(input), Some(slider)) = (
            canvas_ref.get(),
            gold_ref.get(),
            input_ref.get(),
            slider_ref.get(),
        ) else {
            return;
        };
        if controller.with_value(Option::is_some) {
            return;
        }

        let canvas = canvas.unchecked_ref::<HtmlCanvasElement>().clone();
        let mut c = DomController::new(
            DomField::new(input.unchecked_ref::<HtmlInputElement>().clone()),
            DomSlider::new(slider.unchecked_ref::<HtmlInputElement>().clone()),
            SignalOverlays::new(set_opacities),
            DomLayout::new(canvas.clone(), gold.unchecked_ref::<HtmlElement>().clone()),
        );
        c.init();
        controller.set_value(Some(c));

        spawn_local(async move {
            let rendered = match load_image(STAR_IMAGE_SRC).await {
                Ok(star) => render_star_variants(&canvas, &star),
                Err(e) => Err(e),
            };
            match rendered {
                Ok(v) => set_variants.set(Some(v)),
                Err(e) => log::error!("Failed to render star variants: {:?}", e),
            }
        });
    });

    // ========== Controller callbacks ==========
    let on_input_change = Callback::new(move |_: ()| {
        controller.update_value(|c| {
            if let Some(c) = c {
                c.handle_input_change();
            }
        });
    });

    let on_slider_change = Callback::new(move |_: ()| {
        controller.update_value(|c| {
            if let Some(c) = c {
                c.handle_slider_change();
            }
        });
    });

    let on_resize = Callback::new(move |_: ()| {
        controller.with_value(|c| {
            if let Some(c) = c {
                c.handle_resize();
            }
        });
    });

    use_window_resize(move || on_resize.call(()));

    view! {
        <main class="flex flex-col items-center gap-6 p-6 min-h-screen bg-black">
            <h1 class="text-white text-xl">"Doppler Effect"</h1>
            <StarDisplay
                canvas_ref=canvas_ref
                gold_ref=gold_ref
                variants=variants.into()
                opacities=opacities.into()
                on_gold_load=on_resize
            />
            <VelocityControls
                input_ref=input_ref
                slider_ref=slider_ref
                on_input_change=on_input_change
                on_slider_change=on_slider_change
            />
        </main>
    }
}
