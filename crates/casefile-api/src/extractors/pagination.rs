//! Pagination query parameter extractor.

use serde::{Deserialize, Serialize};

use casefile_core::types::pagination::PageRequest;

/// Query parameters for paginated endpoints.
///
/// Values arrive as raw strings and are parsed leniently: anything that is
/// not a positive integer falls back to the defaults, matching how the API
/// has always treated `?page=abc`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListParams {
    /// Page number (1-based, default: 1).
    pub page: Option<String>,
    /// Records per page (default: 10, max: 100).
    pub limit: Option<String>,
}

impl ListParams {
    /// Converts to a `PageRequest`.
    pub fn into_page_request(self) -> PageRequest {
        PageRequest::from_params(parse_param(self.page), parse_param(self.limit))
    }
}

fn parse_param(raw: Option<String>) -> Option<u64> {
    raw.and_then(|s| s.trim().parse().ok())
}
