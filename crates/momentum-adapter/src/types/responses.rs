/*
[INPUT]:  Raw JSON bodies from the Momentum API
[OUTPUT]: Envelope-agnostic payload and error body types
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use serde::Deserialize;

/// Response body that is either bare or wrapped as `{ "data": ..., "message": ... }`
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiPayload<T> {
    Enveloped {
        data: T,
        #[serde(default)]
        message: Option<String>,
    },
    Bare(T),
}

impl<T> ApiPayload<T> {
    pub fn into_inner(self) -> T {
        match self {
            ApiPayload::Enveloped { data, .. } => data,
            ApiPayload::Bare(data) => data,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            ApiPayload::Enveloped { message, .. } => message.as_deref(),
            ApiPayload::Bare(_) => None,
        }
    }
}

/// Error body of a non-2xx response; only `message` is read
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}
