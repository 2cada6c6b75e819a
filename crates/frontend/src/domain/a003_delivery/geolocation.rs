use contracts::domain::a001_store::Coordinates;
use js_sys::{Promise, Reflect};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

/// One position fix from the browser geolocation API
pub async fn current_position() -> Result<Coordinates, String> {
    let geolocation = web_sys::window()
        .ok_or("No window")?
        .navigator()
        .geolocation()
        .map_err(|e| format!("Geolocation unavailable: {:?}", e))?;

    let promise = Promise::new(&mut |resolve, reject| {
        if let Err(e) = geolocation.get_current_position_with_error_callback(&resolve, Some(&reject)) {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });
    let position = JsFuture::from(promise)
        .await
        .map_err(|e| format!("Location request failed: {:?}", e))?;

    let coords = Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|e| format!("Malformed position: {:?}", e))?;
    let read = |field: &str| {
        Reflect::get(&coords, &JsValue::from_str(field))
            .ok()
            .and_then(|v| v.as_f64())
            .ok_or_else(|| format!("Position has no {}", field))
    };

    Ok(Coordinates::new(read("latitude")?, read("longitude")?))
}
