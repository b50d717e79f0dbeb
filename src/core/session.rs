//! Session - identificativo di sessione per client, trasportato da un cookie
//!
//! Il middleware legge il cookie `SERIES_SESSION`; se manca o non è un uuid
//! valido ne genera uno nuovo e lo restituisce con `Set-Cookie`.
//! Gli handler ricevono la sessione con `Extension<Session>`.

use axum::{
    body::Body,
    extract::Request,
    http::{HeaderValue, Response, header},
    middleware::Next,
};
use tracing::{debug, warn};
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "SERIES_SESSION";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Session(Uuid);

impl Session {
    pub fn new() -> Self {
        Session(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }

    /// Cerca il cookie di sessione nell'header `Cookie`
    pub fn from_cookie_header(header: &str) -> Option<Self> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == SESSION_COOKIE)
            .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
            .map(Session)
    }

    fn set_cookie_value(&self) -> String {
        format!("{}={}; HttpOnly; SameSite=Lax; Path=/", SESSION_COOKIE, self.0)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

pub async fn session_middleware(mut req: Request, next: Next) -> Response<Body> {
    let existing = req
        .headers()
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(Session::from_cookie_header);

    let (session, is_new) = match existing {
        Some(session) => (session, false),
        None => {
            let session = Session::new();
            debug!("Starting new session {}", session.id());
            (session, true)
        }
    };

    req.extensions_mut().insert(session);
    let mut response = next.run(req).await;

    if is_new {
        match HeaderValue::from_str(&session.set_cookie_value()) {
            Ok(cookie) => {
                response.headers_mut().append(header::SET_COOKIE, cookie);
            }
            Err(e) => warn!("Failed to build session cookie: {:?}", e),
        }
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_session_cookie_among_others() {
        let session = Session::new();
        let header = format!("theme=dark; {}={}; lang=pt", SESSION_COOKIE, session.id());
        assert_eq!(Session::from_cookie_header(&header), Some(session));
    }

    #[test]
    fn test_invalid_session_cookie_is_ignored() {
        let header = format!("{}=not-a-uuid", SESSION_COOKIE);
        assert_eq!(Session::from_cookie_header(&header), None);
        assert_eq!(Session::from_cookie_header("other=1"), None);
        assert_eq!(Session::from_cookie_header(""), None);
    }

    #[test]
    fn test_set_cookie_value() {
        let session = Session::new();
        let cookie = session.set_cookie_value();
        assert!(cookie.starts_with(&format!("{}={}", SESSION_COOKIE, session.id())));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
    }
}
