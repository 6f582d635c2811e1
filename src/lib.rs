//! Client library for the Tynt analytics API.
//!
//! Tynt buckets the web pages it analyzes into named categories and exposes
//! engagement data for each: top pages, top images, and top search terms.
//! This crate wraps the v1 REST API behind [`TyntClient`] with typed
//! responses and typed errors.
//!
//! You need a Tynt application ID to access the live API; sign up as a Tynt
//! developer to obtain one.

pub mod client;

pub use client::error::Error;
pub use client::types::{Category, Image, Images, Page, Pages};
pub use client::TyntClient;
