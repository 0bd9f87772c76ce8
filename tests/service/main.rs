//! Message API integration tests.
//!
//! Runs both API versions over a shared store, without HTTP.

mod v1;
