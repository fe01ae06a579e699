//! WebAssembly bindings for trueno-raster.
//!
//! Exposes the JSON draw boundary to a browser front end.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { draw, algorithms } from 'trueno-raster';
//!
//! await init();
//!
//! const response = JSON.parse(draw(JSON.stringify({
//!     algorithm: 'wu-antialiased', x1: 10, y1: 10, x2: 200, y2: 90,
//! })));
//! for (const p of response.points) {
//!     ctx.globalAlpha = p.alpha;
//!     ctx.fillRect(p.x, p.y, 1, 1);
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::protocol;
use crate::raster::Algorithm;

/// Rasterize a JSON draw request and return the JSON response.
///
/// # Errors
///
/// Throws the error message for malformed or unsupported requests.
#[wasm_bindgen]
pub fn draw(request_json: &str) -> Result<String, JsValue> {
    protocol::handle_json(request_json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Canonical names of the supported algorithms.
#[wasm_bindgen]
pub fn algorithms() -> Vec<String> {
    Algorithm::ALL.iter().map(|a| a.name().to_string()).collect()
}
