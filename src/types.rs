//! Wire-level request and response types for `generateContent`

use serde::{Deserialize, Serialize};

/// Request body for a `generateContent` call
///
/// The API accepts several contents per request; this library always sends
/// exactly one, built fresh per call.
///
/// [API Reference](https://ai.google.dev/api/generate-content#request-body)
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GenerateContent {
    pub contents: Vec<Content>,
}

/// An ordered group of parts making up one turn of input or output
///
/// Part order is significant: for multimodal input the text part precedes
/// the inline-data part, which affects how the model reads the prompt.
///
/// [API Reference](https://ai.google.dev/api/caching#Content)
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Content {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parts: Vec<Part>,
}

/// The smallest unit of multimodal content, either text or inline data
///
/// Exactly one field is populated at a time. Unset fields are omitted from
/// the serialized form entirely; the API rejects explicit nulls.
///
/// [API Reference](https://ai.google.dev/api/caching#Part)
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: &str) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    pub fn inline_data(mime_type: &str, data: &str) -> Self {
        Self {
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            ..Default::default()
        }
    }
}

/// Media bytes embedded directly in the request as base64 text
///
/// The MIME type is taken on trust; no check is made that the payload
/// actually decodes to media of that type.
///
/// [API Reference](https://ai.google.dev/api/caching#Blob)
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Response from the model, carrying zero or more candidates
///
/// An absent or `null` candidate list deserializes to an empty one; the
/// service producing nothing is a valid outcome, not a decode failure.
///
/// [API Reference](https://ai.google.dev/api/generate-content#generatecontentresponse)
#[derive(Debug, Deserialize)]
pub struct Response {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidates: Vec<Candidate>,
}

/// One alternative generated output for a single request
///
/// [API Reference](https://ai.google.dev/api/generate-content#candidate)
#[derive(Debug, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let value = Option::<Vec<T>>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// Either a decoded payload or the service's JSON error envelope
///
/// `Err` is listed first: [`Response`] tolerates missing fields, so an error
/// body would otherwise satisfy the `Ok` branch with an empty candidate list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Err(ApiError),
    Ok(T),
}

#[derive(Debug, Deserialize)]
pub struct ApiError {
    pub error: ErrorDetail,
}

/// Error body returned by the service alongside a non-success status
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub status: Status,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(fmt, "{} ({:?}): {}", self.code, self.status, self.message)
    }
}

/// Common backend error codes you may encounter
///
/// Use the [API Reference](https://ai.google.dev/gemini-api/docs/troubleshooting#error-codes) for
/// troubleshooting steps
#[derive(Debug, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The request body is malformed
    InvalidArgument,
    /// Gemini API free tier is not available in your country. Please enable billing on your project in Google AI Studio.
    FailedPrecondition,
    /// Your API key doesn't have the required permissions.
    PermissionDenied,
    /// The requested resource wasn't found.
    NotFound,
    /// You've exceeded the rate limit.
    ResourceExhausted,
    /// An unexpected error occurred on Google's side.
    Internal,
    /// The service may be temporarily overloaded or down.
    Unavailable,
    /// The service is unable to finish processing within the deadline.
    DeadlineExceeded,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_part_omits_inline_data_key() {
        let request = GenerateContent {
            contents: vec![Content {
                parts: vec![Part::text("hello")],
            }],
        };

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({ "contents": [{ "parts": [{ "text": "hello" }] }] })
        );
    }

    #[test]
    fn image_request_keeps_text_part_first() {
        let request = GenerateContent {
            contents: vec![Content {
                parts: vec![
                    Part::text("describe"),
                    Part::inline_data("image/png", "QQ=="),
                ],
            }],
        };

        let value = serde_json::to_value(request).unwrap();
        assert_eq!(
            value,
            json!({
                "contents": [{
                    "parts": [
                        { "text": "describe" },
                        { "inline_data": { "mime_type": "image/png", "data": "QQ==" } },
                    ]
                }]
            })
        );
    }

    #[test]
    fn built_request_round_trips_with_part_order_intact() {
        let request = GenerateContent {
            contents: vec![Content {
                parts: vec![
                    Part::text("describe"),
                    Part::inline_data("image/jpeg", "aGk="),
                ],
            }],
        };

        let json = serde_json::to_string(&request).unwrap();
        let decoded: GenerateContent = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn empty_candidate_list_deserializes() {
        let response: Response = serde_json::from_value(json!({ "candidates": [] })).unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn null_candidate_list_deserializes_as_empty() {
        let response: Response = serde_json::from_value(json!({ "candidates": null })).unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn absent_candidate_list_deserializes_as_empty() {
        let response: Response = serde_json::from_value(json!({})).unwrap();
        assert!(response.candidates.is_empty());
    }

    #[test]
    fn null_part_list_deserializes_as_empty() {
        let response: Response = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": null } }]
        }))
        .unwrap();

        let content = response.candidates[0].content.as_ref().unwrap();
        assert!(content.parts.is_empty());
    }

    #[test]
    fn error_body_parses_through_api_response() {
        let body = json!({
            "error": {
                "code": 429,
                "message": "quota exceeded",
                "status": "RESOURCE_EXHAUSTED"
            }
        });

        match serde_json::from_value::<ApiResponse<Response>>(body).unwrap() {
            ApiResponse::Err(api_error) => {
                assert_eq!(api_error.error.code, 429);
                assert_eq!(api_error.error.message, "quota exceeded");
            }
            ApiResponse::Ok(_) => panic!("expected the error branch"),
        }
    }
}
