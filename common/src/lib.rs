//! Target-independent core of the CRUD console: record models, the backend
//! route table, an API client over a pluggable transport, and the state
//! machines behind every page.

pub mod api;
pub mod config;
pub mod model;
pub mod pages;
pub mod requests;
