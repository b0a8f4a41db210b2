mod window_resize;

pub use window_resize::use_window_resize;
