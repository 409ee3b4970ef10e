//! Embedded asset helpers.

use base64::{Engine as _, engine::general_purpose::STANDARD};

/// The bundled logo, shared by every screen.
pub const LOGO_SVG: &str = include_str!("../assets/logo.svg");

/// Returns the logo as a data URL for display in a webview or browser.
pub fn logo_data_url() -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(LOGO_SVG))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logo_data_url_is_base64_svg() {
        let url = logo_data_url();
        assert!(url.starts_with("data:image/svg+xml;base64,"));
        assert!(url.len() > "data:image/svg+xml;base64,".len());
    }
}
