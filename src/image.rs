use crate::core::SourceImage;
use crate::dom;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Loads and decodes `url`, then reads its pixels back at natural size.
/// Errors cover network/decode failures and tainted (cross-origin) canvases.
pub async fn load_source(url: &str) -> anyhow::Result<SourceImage> {
    let img = web::HtmlImageElement::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    img.set_cross_origin(Some("anonymous"));
    img.set_src(url);
    let decoded: js_sys::Promise = img.decode();
    JsFuture::from(decoded)
        .await
        .map_err(|e| anyhow::anyhow!("decode {} failed: {:?}", url, e))?;
    read_pixels(&img)
}

fn read_pixels(img: &web::HtmlImageElement) -> anyhow::Result<SourceImage> {
    let (w, h) = (img.natural_width(), img.natural_height());
    if w == 0 || h == 0 {
        anyhow::bail!("image has no pixels");
    }
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let offscreen = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|_| anyhow::anyhow!("offscreen element is not a canvas"))?;
    offscreen.set_width(w);
    offscreen.set_height(h);
    let ctx = offscreen
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("offscreen 2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|_| anyhow::anyhow!("unexpected context type"))?;
    ctx.draw_image_with_html_image_element(img, 0.0, 0.0)
        .map_err(|e| anyhow::anyhow!("drawImage failed: {:?}", e))?;
    let data = ctx
        .get_image_data(0.0, 0.0, w as f64, h as f64)
        .map_err(|e| anyhow::anyhow!("getImageData failed: {:?}", e))?;
    Ok(SourceImage::new(w as usize, h as usize, data.data().0)?)
}
