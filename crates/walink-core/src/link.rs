use serde::Serialize;
use url::Url;

use crate::error::CoreError;
use crate::phone::{normalize_phone, DefaultCountryCode, NormalizedPhone};
use crate::request::LaunchRequest;

pub const DEFAULT_LINK_HOST: &str = "wa.me";

/// Checks that `host` is a bare host name usable as the authority of a chat
/// link and returns it lowercased.
pub fn validate_link_host(host: &str) -> Result<String, CoreError> {
    let trimmed = host.trim();
    if trimmed.is_empty() || trimmed.contains(['/', '?', '#', '@', ':']) {
        return Err(CoreError::InvalidLinkHost(host.to_string()));
    }
    let url = Url::parse(&format!("https://{trimmed}/"))
        .map_err(|_| CoreError::InvalidLinkHost(host.to_string()))?;
    match url.host_str() {
        Some(parsed) if parsed.eq_ignore_ascii_case(trimmed) => Ok(parsed.to_string()),
        _ => Err(CoreError::InvalidLinkHost(host.to_string())),
    }
}

/// `https://<host>/<bare digits>?text=<percent-encoded message>`
pub fn build_chat_link(
    host: &str,
    phone: &NormalizedPhone,
    message: &str,
) -> Result<Url, CoreError> {
    let host = validate_link_host(host)?;
    // only the RFC 3986 unreserved set stays literal, so `!*'()` are escaped too
    let text = urlencoding::encode(message);
    let raw = format!("https://{host}/{}?text={text}", phone.bare_digits());
    Url::parse(&raw).map_err(|_| CoreError::InvalidLinkHost(host))
}

/// Everything a launch needs, computed before any handler is asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchPlan {
    pub phone: NormalizedPhone,
    pub url: Url,
}

impl LaunchPlan {
    pub fn new(
        request: &LaunchRequest,
        default: Option<&DefaultCountryCode>,
        host: &str,
    ) -> Result<Self, CoreError> {
        let phone = normalize_phone(&request.phone, default).ok_or(CoreError::EmptyPhone)?;
        let url = build_chat_link(host, &phone, &request.message)?;
        Ok(Self { phone, url })
    }
}
