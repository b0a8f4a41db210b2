use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, HtmlImageElement, ImageData};

/// Load an image and resolve once it has decoded.
///
/// Returns an error if the browser fires `error` instead of `load`.
pub async fn load_image(src: &str) -> Result<HtmlImageElement, JsValue> {
    let image = HtmlImageElement::new()?;
    let (sender, receiver) = futures::channel::oneshot::channel::<Result<(), JsValue>>();
    let sender = std::rc::Rc::new(std::cell::RefCell::new(Some(sender)));

    let on_load = {
        let sender = sender.clone();
        Closure::once(move || {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Ok(()));
            }
        })
    };
    let on_error = {
        let src = src.to_string();
        Closure::once(move || {
            if let Some(tx) = sender.borrow_mut().take() {
                let _ = tx.send(Err(JsValue::from_str(&format!("Failed to load {src}"))));
            }
        })
    };

    image.set_onload(Some(on_load.as_ref().unchecked_ref()));
    image.set_onerror(Some(on_error.as_ref().unchecked_ref()));
    image.set_src(src);

    let result = receiver
        .await
        .map_err(|_| JsValue::from_str("Image load listener dropped"))?;

    image.set_onload(None);
    image.set_onerror(None);
    result.map(|_| image)
}

/// Get 2D rendering context from canvas.
pub fn get_2d_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("No 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()?)
}

/// Read RGBA pixel data from a region of the canvas.
pub fn read_pixels_from_canvas(
    ctx: &CanvasRenderingContext2d,
    width: u32,
    height: u32,
) -> Result<Vec<u8>, JsValue> {
    let image_data = ctx.get_image_data(0.0, 0.0, width as f64, height as f64)?;
    Ok(image_data.data().0)
}

/// Draw RGBA pixel data to canvas at specified position.
pub fn draw_pixels_to_canvas(
    ctx: &CanvasRenderingContext2d,
    pixels: &[u8],
    width: u32,
    x: f64,
    y: f64,
) -> Result<(), JsValue> {
    let image_data = ImageData::new_with_u8_clamped_array_and_sh(
        Clamped(pixels),
        width,
        pixels.len() as u32 / width / 4,
    )?;
    ctx.put_image_data(&image_data, x, y)
}
