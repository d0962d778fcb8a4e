//! Thin wrappers over the browser APIs the booking flow touches.
//!
//! Native builds (mobile renderer, tests) log instead of calling into the DOM.

/// Blocking `window.alert`.
pub fn alert(message: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                tracing::warn!("alert failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::warn!("alert: {message}");
}

/// Open a URL in a new browsing context. Fire-and-forget: failures are not reported.
pub fn open_in_new_tab(url: &str) {
    #[cfg(target_family = "wasm")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target(url, "_blank") {
                tracing::debug!("window.open failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::info!("open (native stub): {url}");
}

/// Overwrite an input's displayed value when the model rejected what was typed.
pub fn set_input_value(id: &str, value: &str) {
    #[cfg(target_family = "wasm")]
    {
        use wasm_bindgen::JsCast;

        let input = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlInputElement>().ok());
        match input {
            Some(input) => input.set_value(value),
            None => tracing::debug!("no input #{id} to rewrite"),
        }
    }
    #[cfg(not(target_family = "wasm"))]
    tracing::debug!("set #{id} (native stub): {value}");
}

/// Write text to the clipboard. Returns whether the write went through.
pub async fn copy_to_clipboard(text: &str) -> bool {
    #[cfg(target_family = "wasm")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise).await.is_ok()
    }
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = text;
        false
    }
}

/// Sleep without blocking the UI thread.
pub async fn sleep_ms(ms: u32) {
    #[cfg(target_family = "wasm")]
    gloo_timers::future::TimeoutFuture::new(ms).await;
    #[cfg(not(target_family = "wasm"))]
    {
        let _ = ms;
    }
}
