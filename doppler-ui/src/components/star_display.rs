//! Layered star images: gold detail layer, canvas, and the two color overlays.

use doppler_core::{OpacityTriple, ShiftColor};
use leptos::*;

use crate::config::{STAR_BLUE_ID, STAR_CANVAS_ID, STAR_GOLD_ID, STAR_IMAGE_SRC, STAR_RED_ID};
use crate::rendering::StarVariants;

fn overlay_id(color: ShiftColor) -> &'static str {
    match color {
        ShiftColor::Blue => STAR_BLUE_ID,
        ShiftColor::Red => STAR_RED_ID,
    }
}

/// Star with opacity-controlled color overlays.
#[component]
pub fn StarDisplay(
    /// Canvas the variants are rendered through
    canvas_ref: NodeRef<html::Canvas>,
    /// Detail (gold) image; the canvas is fitted to it on resize
    gold_ref: NodeRef<html::Img>,
    /// Data URLs of the rendered variants (None until rendered)
    variants: Signal<Option<StarVariants>>,
    /// Current layer opacities
    opacities: Signal<OpacityTriple>,
    /// Called when the gold image has loaded and has a size
    on_gold_load: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="relative inline-block">
            <canvas
                id=STAR_CANVAS_ID
                node_ref=canvas_ref
                class="absolute top-0 -z-10"
            />
            <img
                id=STAR_GOLD_ID
                node_ref=gold_ref
                src=STAR_IMAGE_SRC
                alt="Star"
                class="block max-h-[80vh]"
                style:opacity=move || opacities.get().detail.to_string()
                on:load=move |_| on_gold_load.call(())
            />
            {ShiftColor::ALL
                .into_iter()
                .map(move |color| {
                    view! {
                        <img
                            id=overlay_id(color)
                            alt=""
                            class="absolute top-0 left-0 w-full h-full pointer-events-none"
                            src=move || variants.get().map(|v| v.get(color).to_string())
                            style:opacity=move || opacities.get().shift(color).to_string()
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
