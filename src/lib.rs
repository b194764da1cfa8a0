//! # http-helper
//!
//! A thin request helper over a single HTTP client. Build a request from a
//! method, a target and optional body and headers, send it, and optionally
//! read the body back as text or as a boolean.
//!
//! Every helper owns its [`ClientConfig`]; there is no process-wide client.
//!
//! ```no_run
//! use http_helper::{ClientConfig, Method, RequestHelper, RequestOptions};
//!
//! let mut helper = RequestHelper::new(ClientConfig::default())?;
//! helper.config_mut().set_base_address("http://localhost:8080")?;
//!
//! let ready = helper.send_for_bool(RequestOptions::new(Method::Get, "/ready"))?;
//! assert_eq!(ready, Some(true));
//! # Ok::<(), http_helper::Error>(())
//! ```
//!
//! ## Failure shape
//!
//! Missing inputs and transport failures are logged through `tracing` and
//! come back as the operation's sentinel (`None`, or `false` for downloads).
//! Only malformed targets, JSON serialization and client construction
//! surface as [`Error`].

pub mod config;
mod error;
pub mod helper;
pub mod http_client;
pub mod model;
mod pipeline;

pub use config::{ClientConfig, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use helper::{AsyncRequestHelper, RequestHelper};
pub use model::{
    Body, Decode, Decoded, Method, Request, RequestOptions, Response, Target, Version,
};
pub use url::Url;
