//! Transport-agnostic handling of JSON calculation requests.
//!
//! A request looks like `{"notation": "prefix", "expr": "+ 1 2"}` where
//! `notation` defaults to `infix`. The reply body is `{"result": 3.0}` on
//! success or `{"err": "..."}` on failure.

mod errors;

pub use errors::ServiceError;

use log::{debug, error};
use serde::{Deserialize, Serialize};

use crate::notation::evaluate;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

const MARSHAL_ERROR_BODY: &str = r#"{"err": "server marshal error"}"#;

fn default_notation() -> String {
    "infix".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CalcRequest {
    #[serde(default = "default_notation")]
    pub notation: String,
    #[serde(default)]
    pub expr: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CalcResponse {
    #[serde(rename = "result")]
    Value(f64),
    #[serde(rename = "err")]
    Error(String),
}

/// Status code and encoded body of a handled request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: u16,
    pub body: String,
}

/// Decode a JSON request, evaluate it and encode the reply.
///
/// Malformed requests, unknown notations and parse or evaluation failures
/// all answer with status 400. A result that cannot be encoded as JSON
/// (infinity, NaN) answers with status 500.
pub fn handle_request(body: &str) -> Reply {
    let request: CalcRequest = match serde_json::from_str(body) {
        Ok(request) => request,
        Err(e) => {
            debug!("Rejecting malformed request: {}", e);
            return respond(STATUS_BAD_REQUEST, &CalcResponse::Error(e.to_string()));
        }
    };

    match evaluate(&request.expr, &request.notation) {
        Ok(value) => respond(STATUS_OK, &CalcResponse::Value(value)),
        Err(e) => respond(STATUS_BAD_REQUEST, &CalcResponse::Error(e.to_string())),
    }
}

/// # Errors
///
/// Returns an error if the response holds a non-finite number or
/// serialization fails.
pub fn encode_response(response: &CalcResponse) -> Result<String, ServiceError> {
    if let CalcResponse::Value(value) = response
        && !value.is_finite()
    {
        return Err(ServiceError::NonFiniteResult(*value));
    }
    Ok(serde_json::to_string_pretty(response)?)
}

fn respond(status: u16, response: &CalcResponse) -> Reply {
    match encode_response(response) {
        Ok(body) => Reply { status, body },
        Err(e) => {
            error!("Failed to encode response: {}", e);
            Reply {
                status: STATUS_INTERNAL_ERROR,
                body: MARSHAL_ERROR_BODY.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests;
