//! Schema-constrained inference calls against a vision-capable service.
//!
//! Two calls per analyzed photo: extraction (photo → typed nutrition
//! records) and, optionally, suggestion (records + profile → next-meal
//! advice). Both constrain the response shape at the request level, so a
//! successful call is guaranteed structurally parseable.

pub mod backend;
pub mod extraction;
pub mod openai;
pub mod suggestion;

pub use backend::{ImageInput, InferenceBackend, InferenceRequest, ResponseSchema};
pub use extraction::VisionExtractionClient;
pub use openai::OpenAiBackend;
pub use suggestion::SuggestionClient;
