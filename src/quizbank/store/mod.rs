//! # Storage Layer
//!
//! The [`DataStore`] trait hides where a question bank lives. Commands load the
//! whole bank, run a pure transformation from [`crate::collection`] over it and hand
//! the result back to the store.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: production storage, one JSON file per scope
//! - [`memory::InMemoryStore`]: no persistence, used by tests
//!
//! ## Scope Pattern
//!
//! All operations take a [`Scope`]:
//! - `Scope::Project`: the `.quizbank/` directory of the current project
//! - `Scope::Global`: the user-wide data directory
//!
//! ## Storage Format
//!
//! ```text
//! .quizbank/
//! ├── questions.json   # The bank (JSON array of questions, in order)
//! └── config.json      # Scope configuration
//! ```

use crate::error::Result;
use crate::model::{Question, Scope};
use std::path::PathBuf;

pub mod fs;
pub mod memory;

/// Abstract interface for question bank storage.
pub trait DataStore {
    /// Load the bank of a scope. A scope that was never written is an empty bank.
    fn load_questions(&self, scope: Scope) -> Result<Vec<Question>>;

    /// Replace the bank of a scope, preserving order.
    fn save_questions(&mut self, questions: &[Question], scope: Scope) -> Result<()>;

    /// Location of the bank (for file-based stores)
    fn bank_path(&self, scope: Scope) -> Result<PathBuf>;
}
