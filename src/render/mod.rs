//! HTML presentation of catalog pages.
//!
//! Pages are assembled with `write!` into a `String`; every value coming
//! from the catalog or the request goes through [`escape_html`].

mod pages;

pub use pages::*;

/// Escape HTML special characters
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}
