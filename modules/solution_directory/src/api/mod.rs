//! API layer - REST surface, in-process client and HTTP client

pub mod http;
pub mod native;
pub mod rest;
