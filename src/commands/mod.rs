//! REST Command Wrappers
//!
//! Frontend bindings to the backend API, organized by domain.

mod reply;
mod user;
mod auth;
mod listing;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::AppConfig;
use crate::error::ApiError;

pub use user::*;
pub use auth::*;
pub use listing::*;

/// Handle to the backend API
#[derive(Debug, Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Use the configured origin, or the page's own origin when none is set
    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        if let Some(base) = &config.api_base {
            return Ok(Self::new(base.clone()));
        }
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .ok_or(ApiError::NoOrigin)?;
        Ok(Self::new(origin))
    }

    /// `{base}{prefix}/{id}` with `id` encoded as a single path segment
    fn url(&self, prefix: &str, id: Option<&str>) -> String {
        match id {
            Some(id) => format!("{}{}/{}", self.base, prefix, utf8_percent_encode(id, NON_ALPHANUMERIC)),
            None => format!("{}{}", self.base, prefix),
        }
    }

    fn http(&self) -> &reqwest::Client {
        &self.http
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use super::*;
    use crate::models::ProfileDraft;
    use std::io::{Read, Write};
    use std::net::{TcpListener, TcpStream};
    use std::thread::{self, JoinHandle};

    /// Serve one request with `body` as JSON; yields the raw request text
    fn serve_once(body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base = format!("http://{}", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let request = read_request(&mut stream);
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            request
        });
        (base, handle)
    }

    fn read_request(stream: &mut TcpStream) -> String {
        let mut raw = Vec::new();
        let mut buf = [0u8; 1024];
        loop {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            raw.extend_from_slice(&buf[..n]);
            let text = String::from_utf8_lossy(&raw).to_string();
            if let Some(end) = text.find("\r\n\r\n") {
                let length = text[..end]
                    .lines()
                    .find_map(|line| {
                        let (name, value) = line.split_once(':')?;
                        name.eq_ignore_ascii_case("content-length").then(|| value.trim().parse::<usize>().ok())?
                    })
                    .unwrap_or(0);
                if raw.len() >= end + 4 + length {
                    break;
                }
            }
        }
        String::from_utf8_lossy(&raw).to_string()
    }

    /// Base URL of a port nothing listens on
    fn closed_base() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn update_posts_draft_and_returns_user() {
        let (base, server) = serve_once(r#"{"_id":"u1","userName":"bob","email":"bob@example.com","avatar":"b.png"}"#);
        let draft = ProfileDraft { user_name: "bob".into(), email: "bob@example.com".into(), ..Default::default() };

        let user = update_user(&ApiClient::new(base), "u1", &draft).await.unwrap();
        assert_eq!(user.user_name, "bob");

        let request = server.join().unwrap();
        assert!(request.starts_with("POST /api/user/update/u1 "));
        assert!(request.contains(r#""userName":"bob""#));
        assert!(!request.contains("password"));
    }

    #[tokio::test]
    async fn rejected_reply_surfaces_message() {
        let (base, server) = serve_once(r#"{"success":false,"statusCode":403,"message":"X"}"#);
        let err = delete_user(&ApiClient::new(base), "u1").await.unwrap_err();
        assert_eq!(err.to_string(), "X");
        assert!(server.join().unwrap().starts_with("DELETE /api/user/delete/u1 "));
    }

    #[tokio::test]
    async fn listings_failure_flag_is_rejected() {
        let (base, server) = serve_once(r#"{"success":false}"#);
        let err = list_user_listings(&ApiClient::new(base), "u1").await.unwrap_err();
        assert!(matches!(err, ApiError::Rejected { .. }));
        assert!(server.join().unwrap().starts_with("GET /api/user/listings/u1 "));
    }

    #[tokio::test]
    async fn string_reply_counts_as_success() {
        let (base, server) = serve_once(r#""User has been logged out!""#);
        sign_out(&ApiClient::new(base)).await.unwrap();
        assert!(server.join().unwrap().starts_with("GET /api/auth/signout "));
    }

    #[tokio::test]
    async fn unreachable_backend_is_transport_error() {
        let err = delete_listing(&ApiClient::new(closed_base()), "L1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.to_string().is_empty());
    }
}
