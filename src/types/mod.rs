//! Domain types decoded from wire JSON.
//!
//! Each record is an immutable snapshot of one API response payload. Wire
//! field names are snake_case and occasionally diverge from the record
//! fields (wire `model` maps to an engine identifier, wire `bytes` to a
//! file size); the serde attributes on each type are the authoritative
//! mapping. Derived values such as human-readable timestamps are computed
//! accessors over the stored integers, recomputed per call so they can
//! never drift from the source field.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`EngineId`] | Open-set engine/model identifier |
//! | [`Engine`] | One entry of the engine listing |
//! | [`Completion`] | Text completion with its choices |
//! | [`SearchResult`] | Document index plus relevance score |
//! | [`Classification`] | Label assignment with selected examples |
//! | [`Answers`] | Question answering result |
//! | [`File`] | Uploaded file metadata |
//! | [`SafetyRating`] | Closed content-safety ranking |

pub mod answers;
pub mod classification;
pub mod completion;
pub mod engine;
pub mod file;
pub mod safety;
pub mod search;

pub use answers::{Answers, SelectedDocument};
pub use classification::{Classification, ExampleSource, SelectedExample};
pub use completion::{Choice, Completion, Usage};
pub use engine::{Engine, EngineId};
pub use file::{File, FileDeletion};
pub use safety::SafetyRating;
pub use search::SearchResult;
