//! # dashkit-api
//!
//! Thin async client for the dashboard's two list-data GET endpoints, plus
//! the owned application state that records every completed request.
//!
//! ## Quick Start
//!
//! ```ignore
//! use dashkit_api::{ApiClient, AppState};
//!
//! let client = ApiClient::from_env();
//! let mut state = AppState::new();
//! let list = client.fetch_list(&[("page", "1")], &mut state).await?;
//! assert_eq!(state.requests().len(), 1);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `client` | GET wrappers over `/data` and `/data2` |
//! | `state` | Owned request-record state |
//! | `error` | Error types |

mod client;
mod error;
mod state;

pub use client::{ApiClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use state::{AppState, RequestRecord};
