use crate::entities::*;
use capx_entities::url::ParseError;

/// Blank input means "no URL".
pub fn parse_url_param(url: &str) -> Result<Option<Url>, ParseError> {
    let url = url.trim();
    if url.is_empty() {
        return Ok(None);
    }
    url.parse().map(Some)
}

pub fn trimmed_or_none(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}
