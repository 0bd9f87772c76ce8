//! `Accept` header negotiation for the vendor media types.

use std::fmt;

use axum::http::header::ACCEPT;
use axum::http::HeaderMap;

use crate::service::ApiVersion;

/// Representation format named by the media type suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaFormat {
    Json,
    Xml,
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaFormat::Json => write!(f, "json"),
            MediaFormat::Xml => write!(f, "xml"),
        }
    }
}

/// A parsed `application/vnd.messages-v{N}+{format}` media type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionedMedia {
    pub version: ApiVersion,
    pub format: MediaFormat,
}

impl VersionedMedia {
    const PREFIX: &'static str = "application/vnd.messages-";

    /// Parse one media range, ignoring parameters such as `q` or `charset`.
    pub fn parse(media_type: &str) -> Option<Self> {
        let essence = media_type.split(';').next()?.trim().to_ascii_lowercase();
        let rest = essence.strip_prefix(Self::PREFIX)?;
        let (version, format) = rest.split_once('+')?;
        let version = match version {
            "v1" => ApiVersion::V1,
            "v2" => ApiVersion::V2,
            _ => return None,
        };
        let format = match format {
            "json" => MediaFormat::Json,
            "xml" => MediaFormat::Xml,
            _ => return None,
        };
        Some(Self { version, format })
    }

    /// The vendor media type the client prefers: highest `q` wins, earlier
    /// ranges win ties, and `q=0` ranges are refused.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let mut best: Option<(Self, f32)> = None;
        let ranges = headers
            .get_all(ACCEPT)
            .iter()
            .filter_map(|value| value.to_str().ok())
            .flat_map(|value| value.split(','));

        for range in ranges {
            let Some(media) = Self::parse(range) else {
                continue;
            };
            let q = quality(range);
            if q <= 0.0 {
                continue;
            }
            if best.map_or(true, |(_, best_q)| q > best_q) {
                best = Some((media, q));
            }
        }
        best.map(|(media, _)| media)
    }

    /// Content type for a response rendered in this media type.
    pub fn content_type(&self) -> String {
        format!("{}{}+{}", Self::PREFIX, self.version, self.format)
    }
}

/// The `q` parameter of a media range; 1.0 when absent or malformed.
fn quality(range: &str) -> f32 {
    range
        .split(';')
        .skip(1)
        .filter_map(|param| param.split_once('='))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("q"))
        .and_then(|(_, value)| value.trim().parse::<f32>().ok())
        .unwrap_or(1.0)
}
