//! Icon token normalization — classifies an arbitrary identifier string as an
//! absolute URL, a server-relative media path, or a symbolic key.
//!
//! Callers make no shape guarantee: the same field may hold a full URL, a
//! percent-encoded URL, an uploaded-file path, or a devicon-style key with or
//! without its vendor prefix. Classification never fails.

use serde::{Deserialize, Serialize};

/// Two-letter namespace marker carried by vendor-prefixed symbolic keys
/// (`DiReact` → bare key `react`). Only stripped when followed by an
/// uppercase letter, so keys like `direct` pass through untouched.
pub const VENDOR_PREFIX: &str = "Di";

/// Path segment identifying server-hosted media uploads.
pub const MEDIA_MARKER: &str = "/media/";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconClass {
    AbsoluteUrl,
    MediaPath,
    SymbolicKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedToken {
    pub class: IconClass,
    pub value: String,
}

/// Classifies a raw icon token.
///
/// Idempotent: re-normalizing an already-normalized `value` yields the same
/// classification and value.
pub fn normalize(token: &str) -> NormalizedToken {
    let decoded = decode_token(token);

    if decoded.starts_with("http://") || decoded.starts_with("https://") {
        // A URL previously built from a media path round-trips back to its
        // bare key: keep only the final path segment.
        let value = if contains_media_marker(&decoded) {
            final_path_segment(&decoded).to_string()
        } else {
            decoded.into_owned()
        };
        return NormalizedToken {
            class: IconClass::AbsoluteUrl,
            value,
        };
    }

    if contains_media_marker(&decoded) {
        return NormalizedToken {
            class: IconClass::MediaPath,
            value: decoded.into_owned(),
        };
    }

    NormalizedToken {
        class: IconClass::SymbolicKey,
        value: strip_vendor_prefix(&decoded),
    }
}

/// Percent-decodes the token when decoding changes it. A malformed escape is
/// non-fatal: the original token is kept as-is.
fn decode_token(token: &str) -> std::borrow::Cow<'_, str> {
    match urlencoding::decode(token) {
        Ok(decoded) => decoded,
        Err(_) => std::borrow::Cow::Borrowed(token),
    }
}

fn contains_media_marker(token: &str) -> bool {
    token.contains(MEDIA_MARKER) || token.starts_with(&MEDIA_MARKER[1..])
}

fn final_path_segment(url: &str) -> &str {
    url.rsplit('/').find(|seg| !seg.is_empty()).unwrap_or("")
}

/// `DiReact` → `react`. Tokens that merely start with the two letters
/// (`direct`, `Divider`... with lowercase third char) are left alone.
fn strip_vendor_prefix(token: &str) -> String {
    if let Some(rest) = token.strip_prefix(VENDOR_PREFIX) {
        if rest.chars().next().is_some_and(|c| c.is_uppercase()) {
            return rest.to_lowercase();
        }
    }
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absolute_url_passthrough() {
        let n = normalize("https://example.com/logo.png");
        assert_eq!(n.class, IconClass::AbsoluteUrl);
        assert_eq!(n.value, "https://example.com/logo.png");
    }

    #[test]
    fn test_percent_encoded_url_is_decoded() {
        let n = normalize("https%3A%2F%2Fexample.com%2Flogo.png");
        assert_eq!(n.class, IconClass::AbsoluteUrl);
        assert_eq!(n.value, "https://example.com/logo.png");
    }

    #[test]
    fn test_malformed_escape_falls_back_to_original() {
        // '%zz' is not a valid escape; the token must survive unchanged.
        let n = normalize("%zzicon");
        assert_eq!(n.class, IconClass::SymbolicKey);
        assert_eq!(n.value, "%zzicon");
    }

    #[test]
    fn test_media_path_kept_verbatim() {
        let n = normalize("/media/skills/react.svg");
        assert_eq!(n.class, IconClass::MediaPath);
        assert_eq!(n.value, "/media/skills/react.svg");
    }

    #[test]
    fn test_media_path_without_leading_slash() {
        let n = normalize("media/skills/react.svg");
        assert_eq!(n.class, IconClass::MediaPath);
        assert_eq!(n.value, "media/skills/react.svg");
    }

    #[test]
    fn test_media_url_rederives_bare_key() {
        let n = normalize("https://api.example.com/media/react");
        assert_eq!(n.class, IconClass::AbsoluteUrl);
        assert_eq!(n.value, "react");
    }

    #[test]
    fn test_vendor_prefix_stripped_and_lowercased() {
        let n = normalize("DiReact");
        assert_eq!(n.class, IconClass::SymbolicKey);
        assert_eq!(n.value, "react");
    }

    #[test]
    fn test_vendor_prefix_multiword_key() {
        assert_eq!(normalize("DiPostgresql").value, "postgresql");
    }

    #[test]
    fn test_lowercase_after_prefix_is_not_stripped() {
        let n = normalize("Direct");
        assert_eq!(n.class, IconClass::SymbolicKey);
        assert_eq!(n.value, "Direct");
    }

    #[test]
    fn test_bare_prefix_is_not_stripped() {
        assert_eq!(normalize("Di").value, "Di");
    }

    #[test]
    fn test_plain_key_passthrough() {
        let n = normalize("react");
        assert_eq!(n.class, IconClass::SymbolicKey);
        assert_eq!(n.value, "react");
    }

    #[test]
    fn test_empty_token_is_symbolic_key() {
        let n = normalize("");
        assert_eq!(n.class, IconClass::SymbolicKey);
        assert_eq!(n.value, "");
    }

    #[test]
    fn test_idempotent_for_every_class() {
        for token in [
            "https://example.com/logo.png",
            "/media/skills/react.svg",
            "DiReact",
            "react",
            "Direct",
        ] {
            let first = normalize(token);
            let second = normalize(&first.value);
            assert_eq!(second.class, first.class, "class drifted for {token}");
            assert_eq!(second.value, first.value, "value drifted for {token}");
        }
    }

    #[test]
    fn test_round_trip_media_url_back_to_key() {
        // Symbolic key -> media URL -> normalize recovers the bare key.
        let key = normalize("DiReact").value;
        let url = format!("https://api.example.com/media/{key}");
        let n = normalize(&url);
        assert_eq!(n.class, IconClass::AbsoluteUrl);
        assert_eq!(n.value, "react");
    }
}
