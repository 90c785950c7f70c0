use poem_openapi::Object;

/// Error body returned by volunteer endpoints
///
/// Carries a stable machine-readable code next to the human message so
/// clients can branch on the failure without parsing text. Persistence
/// failures always arrive here with a generic message; the detail stays in
/// the server log.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// Stable error code, e.g. "not_found" or "duplicate_email"
    pub error: String,

    /// Human-readable message, safe to show to callers
    pub message: String,

    /// HTTP status code of the response
    pub status_code: u16,
}
