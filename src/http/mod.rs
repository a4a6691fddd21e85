/*
[INPUT]:  HTTP client configuration and API endpoints
[OUTPUT]: HTTP responses and typed API results
[POS]:    HTTP layer - REST API communication
[UPDATE]: When adding new endpoints or changing client behavior
*/

pub mod accounts;
pub mod bills;
pub mod client;
pub mod error;
pub mod notifications;
pub mod transactions;

pub use error::{ErrorReport, GaxError, Result, handle_error};

pub use client::{ClientConfig, GaxClient, RequestOptions};
