//! # textgen-client
//!
//! Typed async client for a remote text-generation API, covering the
//! engines, completions, search, classifications, answers and files
//! endpoint families.
//!
//! ## Overview
//!
//! The backend this crate talks to is inconsistent about response framing:
//! the same logical reply may arrive as a bare value, a bare error object,
//! or wrapped under a `data`/`error` key depending on the endpoint. The
//! heart of the crate is a small decoding protocol that tries those wire
//! shapes in a fixed precedence order and always yields exactly one of a
//! strongly-typed success value or a structured API error.
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Client, builder and per-endpoint operations |
//! | [`transport`] | HTTP dispatch collaborator behind a trait seam |
//! | [`types`] | Domain records decoded from wire JSON |
//! | [`error`] | Unified error taxonomy |
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use textgen_client::{Client, CompletionParams, EngineId};
//!
//! #[tokio::main]
//! async fn main() -> textgen_client::Result<()> {
//!     let client = Client::builder()
//!         .with_api_key("your-api-key")
//!         .build()?;
//!
//!     let params = CompletionParams {
//!         prompt: Some("Say hello".to_string()),
//!         max_tokens: Some(16),
//!         ..Default::default()
//!     };
//!     let completion = client.completions(&EngineId::Davinci, &params).await?;
//!     println!("{}", completion.choices[0].text);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod transport;
pub mod types;

mod envelope;

// Re-export main types for convenience
pub use client::{
    AnswersParams, Client, ClientBuilder, ClassificationParams, CompletionParams, SearchParams,
    UploadPurpose, DEFAULT_BASE_URL,
};
pub use error::{ApiError, Error};
pub use types::{
    Answers, Classification, Completion, Engine, EngineId, File, FileDeletion, SafetyRating,
    SearchResult,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;
