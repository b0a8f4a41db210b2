//! Page element ids and static assets.

/// Star image the color variants are derived from
pub const STAR_IMAGE_SRC: &str = "./assets/images/star.png";

/// MIME type the variants are published as
pub const VARIANT_MIME: &str = "image/png";

pub const STAR_CANVAS_ID: &str = "starCanvas";
pub const STAR_BLUE_ID: &str = "starBlue";
pub const STAR_GOLD_ID: &str = "starGold";
pub const STAR_RED_ID: &str = "starRed";
pub const VELOCITY_INPUT_ID: &str = "velocityInput";
pub const VELOCITY_SLIDER_ID: &str = "velocitySlider";
