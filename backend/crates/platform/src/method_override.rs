//! HTTP Method Override
//!
//! Browser forms can only submit GET and POST. Form clients reach the
//! PUT/DELETE routes by posting to `?_method=PUT` or `?_method=DELETE`;
//! this middleware rewrites the method before routing. Only POST may be
//! overridden, and only to PUT or DELETE.

use axum::body::Body;
use axum::http::{Method, Request};
use axum::middleware::Next;
use axum::response::Response;

const OVERRIDE_PARAM: &str = "_method";

/// Middleware that applies `?_method=` overrides to POST requests
pub async fn method_override(mut req: Request<Body>, next: Next) -> Response {
    if req.method() == Method::POST {
        if let Some(method) = override_from_query(req.uri().query()) {
            *req.method_mut() = method;
        }
    }

    next.run(req).await
}

fn override_from_query(query: Option<&str>) -> Option<Method> {
    let query = query?;

    query.split('&').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        if key != OVERRIDE_PARAM {
            return None;
        }

        if value.eq_ignore_ascii_case("put") {
            Some(Method::PUT)
        } else if value.eq_ignore_ascii_case("delete") {
            Some(Method::DELETE)
        } else {
            None
        }
    })
}
