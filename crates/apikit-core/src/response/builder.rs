//! Builder for success envelopes.

use axum::http::StatusCode;

use crate::constant::keywords;
use crate::response::sizable::Sizable;
use crate::response::success::SuccessResponse;

/// Builds [`SuccessResponse`] envelopes with automatic status-code and size
/// selection.
pub struct ResponseBuilder;

impl ResponseBuilder {
    /// Success envelope with a payload.
    ///
    /// The status code is chosen from the message content: 201 when it
    /// contains a creation keyword, 200 otherwise. The size comes from the
    /// payload's [`Sizable`] impl.
    pub fn success<T: Sizable>(data: T, message: impl Into<String>) -> SuccessResponse<T> {
        let message = message.into();
        let code = Self::success_status_code(&message);
        let size = data.size();

        SuccessResponse::new(code, message, size, Some(data))
    }

    /// Success envelope without a payload. Size reports 1.
    pub fn success_message(message: impl Into<String>) -> SuccessResponse<()> {
        let message = message.into();
        let code = Self::success_status_code(&message);

        SuccessResponse::new(code, message, 1, None)
    }

    /// Success envelope with an explicit status code.
    ///
    /// `None` omits the `data` field and reports size 1, matching
    /// [`Self::success_message`].
    pub fn success_with_code<T: Sizable>(
        code: impl Into<String>,
        data: Option<T>,
        message: impl Into<String>,
    ) -> SuccessResponse<T> {
        let size = data.size();

        SuccessResponse::new(code, message, size, data)
    }

    /// Empty-result envelope: HTTP 404 with size 0 and no payload.
    ///
    /// Used when a lookup legitimately finds nothing and that is not an
    /// error for the caller.
    pub fn not_found<T>(message: impl Into<String>) -> SuccessResponse<T> {
        SuccessResponse::new(
            StatusCode::NOT_FOUND.as_u16().to_string(),
            message,
            0,
            None,
        )
    }

    fn success_status_code(message: &str) -> String {
        let status = if keywords::contains_creation_keyword(message) {
            StatusCode::CREATED
        } else {
            StatusCode::OK
        };

        status.as_u16().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constant::messages;

    #[test]
    fn test_creation_message_selects_201() {
        let response = ResponseBuilder::success(vec![1], messages::entity::SAVED);
        assert_eq!(response.head.code, "201");
    }

    #[test]
    fn test_plain_message_selects_200() {
        let response = ResponseBuilder::success(vec![1, 2], messages::entities::FOUND);
        assert_eq!(response.head.code, "200");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        let response = ResponseBuilder::success_message("Account CREATED for user.");
        assert_eq!(response.head.code, "201");
        assert_eq!(response.size, 1);
        assert!(response.data.is_none());
    }

    #[test]
    fn test_collection_size() {
        let response = ResponseBuilder::success(vec!["a", "b", "c"], "Records listed.");
        assert_eq!(response.size, 3);
    }

    #[test]
    fn test_explicit_code_wins() {
        let response = ResponseBuilder::success_with_code("202", Some(vec![7]), "Record created.");
        assert_eq!(response.head.code, "202");
        assert_eq!(response.size, 1);
    }

    #[test]
    fn test_explicit_code_without_payload_omits_data() {
        let response = ResponseBuilder::success_with_code::<()>("202", None, "Accepted.");
        let json = serde_json::to_value(&response).expect("serializable");
        assert!(json.get("data").is_none());
        assert_eq!(json["size"], 1);
    }

    #[test]
    fn test_not_found_envelope() {
        let response = ResponseBuilder::not_found::<()>(messages::entity::NOT_FOUND);
        assert_eq!(response.head.code, "404");
        assert_eq!(response.size, 0);
        assert!(response.data.is_none());
        assert!(response.head.success);
    }
}
