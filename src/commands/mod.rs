//! Backend Command Wrappers
//!
//! Frontend bindings to the trade backend's HTTP endpoints, organized by domain.

mod inventory;
mod trades;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

// Re-export all public items
pub use inventory::*;
pub use trades::*;

/// A response that came back, successful or not
struct JsonResponse<T> {
    ok: bool,
    status: u16,
    body: Option<T>,
}

fn js_error(err: JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

/// Send `request` and decode the JSON body. Transport failures are errors;
/// non-2xx statuses are returned so callers can read the server's message.
async fn send<T: DeserializeOwned>(request: Request) -> Result<JsonResponse<T>, String> {
    let window = web_sys::window().ok_or_else(|| "no window available".to_string())?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response: Response = value.dyn_into().map_err(js_error)?;

    let body = match response.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(json) => Some(serde_wasm_bindgen::from_value(json).map_err(|e| e.to_string())?),
            Err(err) if response.ok() => return Err(js_error(err)),
            Err(_) => None,
        },
        Err(err) => return Err(js_error(err)),
    };

    Ok(JsonResponse { ok: response.ok(), status: response.status(), body })
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request.headers().set("Accept", "application/json").map_err(js_error)?;

    let response = send::<T>(request).await?;
    match response.body {
        Some(body) if response.ok => Ok(body),
        _ => Err(format!("GET {} failed with status {}", url, response.status)),
    }
}

async fn post_json<T: DeserializeOwned>(url: &str, body: &str) -> Result<JsonResponse<T>, String> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::SameOrigin);
    opts.set_body(&JsValue::from_str(body));
    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;
    request.headers().set("Content-Type", "application/json").map_err(js_error)?;

    send::<T>(request).await
}
