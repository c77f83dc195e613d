//! Client, builder and per-endpoint operations.
//!
//! Each endpoint family lives in its own file and contributes an `impl
//! Client` block plus its typed parameter struct. Parameter structs
//! serialize straight to the snake_case wire dictionary, with unset
//! options omitted. The shared dispatch-decode-project helpers live in
//! [`core`].

mod answers;
mod builder;
mod classifications;
mod completions;
mod core;
mod engines;
mod files;
mod search;

pub use answers::AnswersParams;
pub use builder::{ClientBuilder, DEFAULT_BASE_URL};
pub use classifications::ClassificationParams;
pub use completions::CompletionParams;
pub use core::Client;
pub use files::UploadPurpose;
pub use search::SearchParams;
