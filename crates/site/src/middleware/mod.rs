//! HTTP middleware stack for the site.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Request ID (add unique ID to each request)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers (CSP, frame options, etc.)
//! 4. Session layer (tower-sessions with in-memory store)

pub mod request_id;
pub mod security_headers;
pub mod session;

pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
