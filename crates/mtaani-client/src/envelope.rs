//! Response envelopes shared by every endpoint.
//!
//! Single-entity calls answer `{ success?, message?, data? }`. Paginated
//! calls answer `{ totalCount, pageNumber?, pageSize?, data: [...] }` and are
//! handed to the caller verbatim. Non-2xx responses carry
//! `{ message, validationErrors?, success? }`.

use serde::{Deserialize, Serialize};

use crate::error::MtaaniError;

/// Success envelope for single-entity and lookup calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwrap the payload, failing with [`MtaaniError::MissingData`] when the
    /// server answered 2xx without one.
    pub fn into_data(self, endpoint: &str, what: &'static str) -> Result<T, MtaaniError> {
        self.data.ok_or_else(|| MtaaniError::MissingData {
            endpoint: endpoint.to_string(),
            what,
        })
    }

    /// The server's message, or `default` when it sent none.
    pub fn message_or(self, default: &str) -> String {
        self.message.unwrap_or_else(|| default.to_string())
    }
}

impl<T: Default> ApiResponse<T> {
    /// The payload, or an empty value for lookups that may legitimately
    /// return nothing.
    pub fn data_or_default(self) -> T {
        self.data.unwrap_or_default()
    }
}

/// Paginated list envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Paginated<T> {
    /// Total number of items matching the query, across all pages.
    pub total_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub validation_errors: Option<Vec<String>>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Pagination parameters for list queries. Page numbers start at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_number: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Pagination {
    pub fn page(page_number: u32, page_size: u32) -> Self {
        Self {
            page_number: Some(page_number),
            page_size: Some(page_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn into_data_fails_without_payload() {
        let resp: ApiResponse<u32> = serde_json::from_str(r#"{"success":true}"#).unwrap();
        let err = resp.into_data("GET /business", "business").unwrap_err();
        assert!(matches!(err, MtaaniError::MissingData { what: "business", .. }));
    }

    #[test]
    fn data_or_default_yields_empty_list() {
        let resp: ApiResponse<Vec<u32>> = serde_json::from_str("{}").unwrap();
        assert!(resp.data_or_default().is_empty());
    }

    #[test]
    fn message_or_falls_back() {
        let resp: ApiResponse<()> = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.message_or("done"), "done");
        let resp: ApiResponse<()> = serde_json::from_str(r#"{"message":"gone"}"#).unwrap();
        assert_eq!(resp.message_or("done"), "gone");
    }

    #[test]
    fn paginated_keeps_metadata() {
        let page: Paginated<u32> = serde_json::from_str(
            r#"{"totalCount":42,"pageNumber":1,"pageSize":10,"data":[1,2,3]}"#,
        )
        .unwrap();
        assert_eq!(page.total_count, 42);
        assert_eq!(page.page_number, Some(1));
        assert_eq!(page.page_size, Some(10));
        assert_eq!(page.data, vec![1, 2, 3]);
    }

    #[test]
    fn error_envelope_reads_validation_errors() {
        let env: ErrorEnvelope = serde_json::from_str(
            r#"{"message":"Bad","validationErrors":["a","b"],"success":false}"#,
        )
        .unwrap();
        assert_eq!(env.message.as_deref(), Some("Bad"));
        assert_eq!(env.validation_errors.unwrap().len(), 2);
    }

    #[test]
    fn pagination_omits_unset_fields() {
        let q = serde_json::to_value(Pagination::default()).unwrap();
        assert_eq!(q, serde_json::json!({}));
        let q = serde_json::to_value(Pagination::page(0, 20)).unwrap();
        assert_eq!(q, serde_json::json!({"pageNumber": 0, "pageSize": 20}));
    }
}
