//! Port trait definitions
//!
//! These traits define the interfaces that adapters must implement.

pub mod fetch;

pub use fetch::HttpFetcher;
