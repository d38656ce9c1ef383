//! REST API client module for the CareerPilot backend.
//!
//! This module provides the `ApiClient` for authenticating and for calling
//! the AI endpoints that generate roadmaps, daily plans and topic
//! explanations.
//!
//! The API uses JWT bearer tokens obtained from `/auth/login`.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
