mod canvas_utils;
mod star_variants;

pub use canvas_utils::{draw_pixels_to_canvas, get_2d_context, load_image, read_pixels_from_canvas};
pub use star_variants::{render_star_variants, StarVariants};
