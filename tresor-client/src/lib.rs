//! # tresor-client
//!
//! Typed binding for the Tresor secret store REST API.
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | `GET` | `/api/secrets?email=…` |
//! | update | `PUT` | `/api/secrets/{id}` |
//! | delete | `DELETE` | `/api/secrets/{id}` |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: use the platform's native TLS implementation.
//! - **`rustls`**: use rustls.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tresor_client::{ClientConfig, HttpSecretApi, SecretApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // TRESOR_API_BASE, or http://localhost:8080
//!     let api = HttpSecretApi::new(ClientConfig::from_env())?;
//!
//!     for secret in api.list_for_user("alice@example.com").await? {
//!         println!("#{} owned by {}: {}", secret.id, secret.user_id, secret.content);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ClientError>`](ClientError). A non-2xx answer
//! becomes [`ClientError::Http`], whose message is the response body, or
//! `"HTTP <status> <reason>"` when the body is blank. Nothing is retried.

mod config;
mod error;
mod http_api;
mod http_client;
mod traits;
mod types;
mod utils;

pub use config::{API_BASE_ENV, ClientConfig, DEFAULT_API_BASE};
pub use error::{ClientError, Result};
pub use http_api::HttpSecretApi;
pub use traits::SecretApi;
pub use types::{SecretContent, SecretId, SecretRecord, UpdateSecretRequest};
