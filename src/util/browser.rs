//! Thin wrappers over browser globals. Requires a browser environment;
//! every call safely no-ops off-browser so native builds and tests never
//! touch `web-sys`.

/// Show a blocking modal alert.
pub fn alert(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
    }
}

/// Scroll the viewport back to the top of the page.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
