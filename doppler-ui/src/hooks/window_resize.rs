// doppler-ui/src/hooks/window_resize.rs

/// Hook that runs `on_resize` whenever the browser window is resized.
/// The listener is removed when the owning reactive scope is disposed.
pub fn use_window_resize(on_resize: impl Fn() + 'static) {
    let _ = leptos_use::use_event_listener(
        leptos_use::use_window(),
        leptos::ev::resize,
        move |_| on_resize(),
    );
}
