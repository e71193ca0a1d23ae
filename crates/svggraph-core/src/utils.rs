use regex::Regex;
use url::Url;

pub const BLANK_URL: &str = "about:blank";

fn ctrl_characters_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"[\x00-\x1F\x7F-\x9F\u{200B}-\u{200D}\u{FEFF}]").expect("valid regex")
    })
}

fn url_scheme_regex() -> &'static Regex {
    static RE: std::sync::OnceLock<Regex> = std::sync::OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-Za-z][A-Za-z0-9+.\-]*):").expect("valid regex"))
}

fn is_invalid_protocol(scheme: &str) -> bool {
    matches!(scheme, "javascript" | "data" | "vbscript")
}

/// Makes a problem link safe to place in an `href`.
///
/// Script-capable schemes and unparsable http(s) URLs become `about:blank`; relative links and
/// other schemes pass through with control characters stripped.
pub fn sanitize_url(link: &str) -> String {
    let cleaned = ctrl_characters_regex().replace_all(link, "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return BLANK_URL.to_string();
    }

    if matches!(cleaned.as_bytes().first(), Some(b'.' | b'/' | b'?' | b'#')) {
        return cleaned.to_string();
    }

    let Some(caps) = url_scheme_regex().captures(cleaned) else {
        return cleaned.to_string();
    };
    let scheme = caps[1].to_ascii_lowercase();

    if is_invalid_protocol(&scheme) {
        tracing::debug!(scheme, "rejecting problem link");
        return BLANK_URL.to_string();
    }

    if scheme == "http" || scheme == "https" {
        let Ok(parsed) = Url::parse(cleaned) else {
            return BLANK_URL.to_string();
        };
        return parsed.to_string();
    }

    cleaned.to_string()
}
