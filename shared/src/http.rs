//! HTTP helpers for Lambda functions.
//!
//! Every response, including errors and the preflight answer, carries the
//! permissive CORS header set so the browser client can call the function
//! from any origin.

use lambda_http::{Body, Response};
use serde::Serialize;
use serde_json::json;

/// CORS headers applied to every response.
pub const CORS_HEADERS: [(&str, &str); 2] = [
    ("Access-Control-Allow-Origin", "*"),
    (
        "Access-Control-Allow-Headers",
        "authorization, x-client-info, apikey, content-type",
    ),
];

fn builder_with_cors(status: u16) -> lambda_http::http::response::Builder {
    let mut builder = Response::builder().status(status);
    for (name, value) in CORS_HEADERS {
        builder = builder.header(name, value);
    }
    builder
}

/// Create a JSON response with the given status code and data.
pub fn json_response<T: Serialize>(
    status: u16,
    data: &T,
) -> Result<Response<Body>, lambda_http::Error> {
    Ok(builder_with_cors(status)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(data)?))
        .expect("Failed to build response"))
}

/// Create an `{"error": ...}` response with the given status code and message.
pub fn error_response(
    status: u16,
    message: impl Into<String>,
) -> Result<Response<Body>, lambda_http::Error> {
    json_response(status, &json!({ "error": message.into() }))
}

/// Empty 200 response answering a CORS preflight (OPTIONS) request.
pub fn preflight_response() -> Response<Body> {
    builder_with_cors(200)
        .body(Body::Empty)
        .expect("Failed to build response")
}
