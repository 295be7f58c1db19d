//! Service layer modules for the profile engine.
//!
//! Contains validation, prompt synthesis, filesystem persistence and the
//! profile service that ties them together.

pub mod profile_service;
pub mod prompt;
pub mod repository;
pub mod validator;

pub use profile_service::{BuiltProfile, Persistence, ProfileOutcome, ProfileService};
pub use prompt::{PromptFields, PromptSynthesizer};
pub use repository::ProfileRepository;
