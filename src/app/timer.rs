//! Cross-target sleep used by deferred UI transitions.

use std::time::Duration;

/// Suspend the current task for `duration`.
///
/// In the browser this awaits a `setTimeout` promise; natively it defers to
/// the tokio timer. If the browser timer cannot be scheduled the promise
/// resolves at once, so callers never wait forever.
#[cfg(target_arch = "wasm32")]
pub async fn sleep(duration: Duration) {
    let millis = i32::try_from(duration.as_millis()).unwrap_or(i32::MAX);
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        let scheduled = web_sys::window().map(|window| {
            window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis)
        });
        if !timeout_scheduled(&scheduled) {
            tracing::warn!("setTimeout unavailable, skipping {}ms delay", millis);
            let _ = resolve.call0(&wasm_bindgen::JsValue::UNDEFINED);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Whether a `setTimeout` call actually registered a handle.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
fn timeout_scheduled<E>(scheduled: &Option<Result<i32, E>>) -> bool {
    matches!(scheduled, Some(Ok(_)))
}
