use serde_json::Value;

use crate::service::{
    CalcRequest, CalcResponse, STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR, STATUS_OK,
    ServiceError, encode_response, handle_request,
};

fn body_json(body: &str) -> Option<Value> {
    serde_json::from_str(body).ok()
}

#[test]
fn test_request_defaults_to_infix() {
    let request: Result<CalcRequest, _> = serde_json::from_str(r#"{"expr": "1 + 2"}"#);
    assert!(request.is_ok());
    if let Ok(request) = request {
        assert_eq!(request.notation, "infix");
        assert_eq!(request.expr, "1 + 2");
    }
}

#[test]
fn test_handle_infix_request() {
    let reply = handle_request(r#"{"expr": "2 + 2 * 2"}"#);
    assert_eq!(reply.status, STATUS_OK);
    let json = body_json(&reply.body);
    assert_eq!(json, Some(serde_json::json!({ "result": 6.0 })));
}

#[test]
fn test_handle_prefix_request() {
    let reply = handle_request(r#"{"notation": "prefix", "expr": "/ 3 2"}"#);
    assert_eq!(reply.status, STATUS_OK);
    let json = body_json(&reply.body);
    assert_eq!(json, Some(serde_json::json!({ "result": 1.5 })));
}

#[test]
fn test_handle_evaluation_error() {
    let reply = handle_request(r#"{"expr": "1 / 0"}"#);
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    let json = body_json(&reply.body);
    assert_eq!(json, Some(serde_json::json!({ "err": "Division by zero" })));
}

#[test]
fn test_handle_unsupported_notation() {
    let reply = handle_request(r#"{"notation": "postfix", "expr": "1 2 +"}"#);
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    let json = body_json(&reply.body);
    assert_eq!(
        json,
        Some(serde_json::json!({ "err": "unsupported notation: postfix" }))
    );
}

#[test]
fn test_handle_malformed_json() {
    let reply = handle_request("{not json");
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    let json = body_json(&reply.body);
    assert!(matches!(json, Some(ref v) if v.get("err").is_some_and(Value::is_string)));
}

#[test]
fn test_handle_missing_expression() {
    let reply = handle_request("{}");
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    let json = body_json(&reply.body);
    assert_eq!(
        json,
        Some(serde_json::json!({
            "err": "invalid expression string: evaluated to 0 final expressions"
        }))
    );
}

#[test]
fn test_handle_non_finite_result() {
    let reply = handle_request(r#"{"expr": "1e308 * 10"}"#);
    assert_eq!(reply.status, STATUS_INTERNAL_ERROR);
    assert_eq!(reply.body, r#"{"err": "server marshal error"}"#);
}

#[test]
fn test_encode_response() {
    let encoded = encode_response(&CalcResponse::Value(f64::NAN));
    assert!(matches!(encoded, Err(ServiceError::NonFiniteResult(_))));

    let encoded = encode_response(&CalcResponse::Error("boom".to_string()));
    assert!(encoded.is_ok());
    if let Ok(body) = encoded {
        assert_eq!(body_json(&body), Some(serde_json::json!({ "err": "boom" })));
    }
}

#[test]
fn test_handle_out_of_range_literal() {
    let reply = handle_request(r#"{"expr": "1e400 - 1"}"#);
    assert_eq!(reply.status, STATUS_BAD_REQUEST);
    let json = body_json(&reply.body);
    assert_eq!(
        json,
        Some(serde_json::json!({
            "err": "failed to parse token as number 1e400: value out of range"
        }))
    );
}
