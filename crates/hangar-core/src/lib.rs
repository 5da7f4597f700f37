//! Foundation types and collaborator interfaces for the Hangar launcher
//! backend.
//!
//! This crate sits at the bottom of the dependency hierarchy: it has zero
//! internal crate dependencies and defines the seams the editor shell wires
//! together around the patch engine - the model-invocation trait, the
//! selection cache, and edit-prompt composition.

pub mod model;
pub mod prompt;
pub mod selection;

pub use model::{ModelClient, ModelError};
pub use prompt::{build_edit_prompt, EditRequest};
pub use selection::{Selection, SelectionCache};
