//! Single configuration point for the backend base URL.
//!
//! Every API call goes through [`get_backend_url`]: debug builds talk to the
//! backend running locally, release builds go through the same-origin `/api`
//! reverse proxy.

#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:8000"  // Development URL when running the backend locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "/api"  // Same-origin reverse proxy in production
}
