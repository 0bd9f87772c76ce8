//! Store integration tests.
//!
//! Exercises the in-memory store from many threads at once:
//! - identities stay unique across concurrent creates
//! - readers never see the two indexes disagree
//! - a scan is a consistent snapshot while writers append

mod scenarios;
