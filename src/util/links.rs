//! Outbound side effects: browser launches, mail composition, clipboard.
//!
//! Everything here is fire-and-forget. A failure (no browser, headless
//! session, clipboard denied) is logged and reported as `false` so the
//! caller can show a neutral status line; it is never an application error.

use url::Url;

/// Where the app itself lives, used by the share and about actions.
pub const APP_HOME_URL: &str = "https://github.com/dhofheinz/patrika";

/// Feedback recipient for the menu's feedback action.
pub const FEEDBACK_EMAIL: &str = "patrika@dhofheinz.dev";

/// Open a catalog URL in the system browser.
///
/// The URL is validated before being handed to the OS: only http/https
/// schemes are ever launched, so a corrupt catalog entry cannot smuggle a
/// `file://` or custom-scheme payload into the handler.
pub fn open_in_browser(raw: &str) -> bool {
    match Url::parse(raw) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => match open::that(raw) {
            Ok(()) => {
                tracing::debug!(url = %raw, "opened in browser");
                true
            }
            Err(e) => {
                tracing::warn!(url = %raw, error = %e, "failed to open browser");
                false
            }
        },
        Ok(url) => {
            tracing::warn!(url = %raw, scheme = %url.scheme(), "refusing to open non-http url");
            false
        }
        Err(e) => {
            tracing::warn!(url = %raw, error = %e, "invalid url");
            false
        }
    }
}

/// Extract the host of a URL for display next to a source name.
pub fn domain_of(raw: &str) -> Option<String> {
    let url = Url::parse(raw).ok()?;
    url.host_str().map(|h| h.trim_start_matches("www.").to_string())
}

/// Compose a feedback email in the user's mail client.
pub fn compose_mail(to: &str, subject: &str, body: &str) -> bool {
    let encode = |s: &str| -> String { url::form_urlencoded::byte_serialize(s.as_bytes()).collect() };
    let mailto = format!("mailto:{}?subject={}&body={}", to, encode(subject), encode(body));
    match open::that(&mailto) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "failed to launch mail client");
            false
        }
    }
}

/// Copy the app link to the system clipboard (the share action).
pub fn copy_to_clipboard(text: &str) -> bool {
    match arboard::Clipboard::new().and_then(|mut cb| cb.set_text(text.to_string())) {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "clipboard unavailable");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_strips_www() {
        assert_eq!(
            domain_of("https://www.prothomalo.com").as_deref(),
            Some("prothomalo.com")
        );
        assert_eq!(
            domain_of("https://epaper.ittefaq.com.bd/x").as_deref(),
            Some("epaper.ittefaq.com.bd")
        );
    }

    #[test]
    fn domain_of_garbage_is_none() {
        assert_eq!(domain_of("not a url"), None);
    }

    #[test]
    fn non_http_urls_are_refused() {
        assert!(!open_in_browser("file:///etc/passwd"));
        assert!(!open_in_browser("javascript:alert(1)"));
        assert!(!open_in_browser("definitely not a url"));
    }
}
