use std::time::Duration;

/// How long the special-offer dialog waits after content settles.
pub const SPECIAL_DISPLAY_DELAY: Duration = Duration::from_millis(1000);

/// Upper bound for a single content request. A stalled resource degrades like a failed one.
pub const CONTENT_FETCH_TIMEOUT: Duration = Duration::from_secs(8);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentMode {
    /// Content and contact messages go through the content service.
    Remote,
    /// Bundled mock content, contact messages kept in local storage.
    Offline,
}

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("http://localhost:8001")  // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")  // Production URL
}

pub fn api_url(path: &str) -> String {
    format!("{}/api{}", get_backend_url(), path)
}

pub fn content_mode() -> ContentMode {
    parse_content_mode(option_env!("CONTENT_MODE"))
}

fn parse_content_mode(raw: Option<&str>) -> ContentMode {
    match raw.map(str::trim) {
        Some(mode) if mode.eq_ignore_ascii_case("offline") => ContentMode::Offline,
        _ => ContentMode::Remote,
    }
}
