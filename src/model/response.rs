use serde_derive::Deserialize;

/// Envelope wrapping every listing returned by the reporting service.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub result: Vec<T>,
}
