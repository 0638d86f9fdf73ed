//! HTTP client for a remote directory

pub mod client;

pub use client::HttpClient;
