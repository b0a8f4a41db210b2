//! Velocity number field and log-scale slider.

use doppler_core::DOPPLER_CONFIG;
use leptos::*;

use crate::config::{VELOCITY_INPUT_ID, VELOCITY_SLIDER_ID};

/// Numeric field plus range slider for the star velocity.
///
/// Values are not bound reactively: the controller reads and writes the
/// elements directly so each edit is handled in one synchronous pass.
#[component]
pub fn VelocityControls(
    input_ref: NodeRef<html::Input>,
    slider_ref: NodeRef<html::Input>,
    /// Called on every edit of the number field
    on_input_change: Callback<()>,
    /// Called on every slider movement
    on_slider_change: Callback<()>,
) -> impl IntoView {
    let scale = DOPPLER_CONFIG.scale;

    view! {
        <div class="flex flex-col gap-2 w-80">
            <div class="flex items-center gap-2">
                <label for=VELOCITY_INPUT_ID class="text-white text-sm w-20">"Velocity"</label>
                <input
                    id=VELOCITY_INPUT_ID
                    node_ref=input_ref
                    type="number"
                    class="flex-1 bg-white/10 text-white rounded px-2 py-1"
                    min=scale.min_input
                    max=scale.max_input
                    value="0"
                    on:input=move |_| on_input_change.call(())
                />
            </div>
            <input
                id=VELOCITY_SLIDER_ID
                node_ref=slider_ref
                type="range"
                class="w-full accent-white"
                on:input=move |_| on_slider_change.call(())
            />
            <div class="flex justify-between text-white/50 text-xs">
                <span>"Approaching"</span>
                <span>"Receding"</span>
            </div>
        </div>
    }
}
