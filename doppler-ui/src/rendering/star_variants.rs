//! Blue and red star silhouettes rendered through the star canvas.

use doppler_core::{recolor, Bitmap, ShiftColor, DOPPLER_CONFIG};
use wasm_bindgen::JsValue;
use web_sys::{HtmlCanvasElement, HtmlImageElement};

use super::canvas_utils::{draw_pixels_to_canvas, get_2d_context, read_pixels_from_canvas};
use crate::config::VARIANT_MIME;

/// Display-ready data URLs for the color-shifted stars.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StarVariants {
    pub blue: String,
    pub red: String,
}

impl StarVariants {
    pub fn get(&self, color: ShiftColor) -> &str {
        match color {
            ShiftColor::Blue => &self.blue,
            ShiftColor::Red => &self.red,
        }
    }
}

/// Draw `star` onto `canvas` and derive both color variants from its pixels.
///
/// The canvas is left showing the unmodified star.
pub fn render_star_variants(
    canvas: &HtmlCanvasElement,
    star: &HtmlImageElement,
) -> Result<StarVariants, JsValue> {
    let width = DOPPLER_CONFIG.canvas_width;
    let height = DOPPLER_CONFIG.canvas_height;
    canvas.set_width(width);
    canvas.set_height(height);

    let ctx = get_2d_context(canvas)?;
    ctx.clear_rect(0.0, 0.0, width as f64, height as f64);
    ctx.draw_image_with_html_image_element_and_dw_and_dh(
        star,
        0.0,
        0.0,
        width as f64,
        height as f64,
    )?;

    let source = Bitmap::from_rgba(width, height, read_pixels_from_canvas(&ctx, width, height)?)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let render = |color: ShiftColor| -> Result<String, JsValue> {
        let variant = recolor(&source, color.rgb());
        draw_pixels_to_canvas(&ctx, variant.as_rgba(), width, 0.0, 0.0)?;
        canvas.to_data_url_with_type(VARIANT_MIME)
    };
    let blue = render(ShiftColor::Blue)?;
    let red = render(ShiftColor::Red)?;

    draw_pixels_to_canvas(&ctx, source.as_rgba(), width, 0.0, 0.0)?;

    log::info!(
        "Rendered star variants at {}x{} ({} + {} bytes)",
        width,
        height,
        blue.len(),
        red.len()
    );
    Ok(StarVariants { blue, red })
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// 1x1 opaque white PNG
    const WHITE_PIXEL_PNG: &str = "data:image/png;base64,\
        iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAAC0lEQVR4nGP4DwQACfsD/fteaysAAAAASUVORK5CYII=";

    #[wasm_bindgen_test]
    async fn test_variants_are_png_data_urls_and_canvas_keeps_source() {
        let document = web_sys::window().unwrap().document().unwrap();
        let canvas: HtmlCanvasElement = document.create_element("canvas").unwrap().unchecked_into();
        let star = crate::rendering::load_image(WHITE_PIXEL_PNG).await.unwrap();

        let variants = render_star_variants(&canvas, &star).unwrap();

        assert!(variants.get(ShiftColor::Blue).starts_with("data:image/png"));
        assert!(variants.get(ShiftColor::Red).starts_with("data:image/png"));
        assert_ne!(variants.blue, variants.red);

        let ctx = get_2d_context(&canvas).unwrap();
        let pixels = read_pixels_from_canvas(&ctx, 1, 1).unwrap();
        assert_eq!(pixels, vec![255, 255, 255, 255]);
    }
}
