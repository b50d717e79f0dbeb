//! Override del metodo HTTP per i form HTML
//!
//! Un form può inviare solo GET o POST: `POST /series/edit/1?_method=PATCH`
//! viene riscritto in `PATCH /series/edit/1` prima del routing.
//! Va montato come layer sul router esterno, altrimenti il match della
//! route avviene con il metodo originale.

use crate::dtos::MethodOverrideQuery;
use axum::{
    body::Body,
    extract::{Query, Request},
    http::{Method, Response},
    middleware::Next,
};
use tracing::debug;

/// Metodi che un form può richiedere tramite `_method`
fn overridable(value: &str) -> Option<Method> {
    match value.to_ascii_uppercase().as_str() {
        "PATCH" => Some(Method::PATCH),
        "DELETE" => Some(Method::DELETE),
        _ => None,
    }
}

pub async fn method_override_middleware(mut req: Request, next: Next) -> Response<Body> {
    if req.method() == Method::POST {
        let requested = Query::<MethodOverrideQuery>::try_from_uri(req.uri())
            .ok()
            .and_then(|Query(query)| query.method)
            .and_then(|value| overridable(&value));

        if let Some(method) = requested {
            debug!("Overriding POST {} as {}", req.uri().path(), method);
            *req.method_mut() = method;
        }
    }
    next.run(req).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overridable_methods() {
        assert_eq!(overridable("delete"), Some(Method::DELETE));
        assert_eq!(overridable("PATCH"), Some(Method::PATCH));
        assert_eq!(overridable("PUT"), None);
        assert_eq!(overridable("GET"), None);
        assert_eq!(overridable("TRACE"), None);
    }
}
