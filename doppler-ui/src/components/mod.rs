pub mod star_display;
pub mod velocity_controls;

pub use star_display::StarDisplay;
pub use velocity_controls::VelocityControls;
