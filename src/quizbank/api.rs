//! # API Facade
//!
//! A thin layer over the command functions and the single entry point for every
//! question bank operation, whatever the UI.
//!
//! The facade dispatches to `commands/*.rs` and returns `Result<CmdResult>`. It does
//! no printing and holds no business logic of its own.
//!
//! `QuizApi<S: DataStore>` is generic over the backend: `QuizApi<FileStore>` in the
//! binary, `QuizApi<InMemoryStore>` in tests.

use crate::commands;
use crate::error::Result;
use crate::model::{QuestionType, Scope};
use crate::store::DataStore;
use std::path::{Path, PathBuf};

pub struct QuizApi<S: DataStore> {
    store: S,
    paths: commands::QuizPaths,
}

impl<S: DataStore> QuizApi<S> {
    pub fn new(store: S, paths: commands::QuizPaths) -> Self {
        Self { store, paths }
    }

    pub fn create_question(
        &mut self,
        scope: Scope,
        name: String,
        question_type: QuestionType,
        id: Option<i64>,
    ) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, scope, name, question_type, id)
    }

    pub fn list_questions(&self, scope: Scope, filter: QuestionFilter) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, scope, filter)
    }

    pub fn view_questions(&self, scope: Scope, ids: &[i64]) -> Result<commands::CmdResult> {
        commands::view::run(&self.store, scope, ids)
    }

    pub fn rename_question(
        &mut self,
        scope: Scope,
        id: i64,
        name: &str,
    ) -> Result<commands::CmdResult> {
        commands::rename::run(&mut self.store, scope, id, name)
    }

    pub fn toggle_published(&mut self, scope: Scope, id: i64) -> Result<commands::CmdResult> {
        commands::publish::toggle(&mut self.store, scope, id)
    }

    pub fn publish_all(&mut self, scope: Scope) -> Result<commands::CmdResult> {
        commands::publish::all(&mut self.store, scope)
    }

    pub fn duplicate_question(
        &mut self,
        scope: Scope,
        id: i64,
        new_id: Option<i64>,
    ) -> Result<commands::CmdResult> {
        commands::duplicate::run(&mut self.store, scope, id, new_id)
    }

    pub fn change_type(
        &mut self,
        scope: Scope,
        id: i64,
        question_type: QuestionType,
    ) -> Result<commands::CmdResult> {
        commands::retype::run(&mut self.store, scope, id, question_type)
    }

    /// Replaces the option at `index`, or appends when `index` is [`APPEND`].
    pub fn edit_option(
        &mut self,
        scope: Scope,
        id: i64,
        index: isize,
        text: &str,
    ) -> Result<commands::CmdResult> {
        commands::options::run(&mut self.store, scope, id, index, text)
    }

    pub fn update_question(
        &mut self,
        scope: Scope,
        id: i64,
        edit: &QuestionEdit,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, scope, id, edit)
    }

    pub fn merge_question(
        &mut self,
        scope: Scope,
        source_id: i64,
        name: &str,
        points: Option<u32>,
        new_id: Option<i64>,
    ) -> Result<commands::CmdResult> {
        commands::merge::run(&mut self.store, scope, source_id, name, points, new_id)
    }

    pub fn delete_questions(&mut self, scope: Scope, ids: &[i64]) -> Result<commands::CmdResult> {
        commands::delete::run(&mut self.store, scope, ids)
    }

    pub fn stats(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::stats::run(&self.store, scope)
    }

    pub fn answers(&self, scope: Scope, published_only: bool) -> Result<commands::CmdResult> {
        commands::answers::run(&self.store, scope, published_only)
    }

    pub fn check_answer(&self, scope: Scope, id: i64, answer: &str) -> Result<commands::CmdResult> {
        commands::check::run(&self.store, scope, id, answer)
    }

    pub fn export_csv(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::export::csv(&self.store, scope)
    }

    pub fn export_archive(&self, scope: Scope, out_dir: &Path) -> Result<commands::CmdResult> {
        commands::export::archive(&self.store, scope, out_dir)
    }

    pub fn import_questions(
        &mut self,
        scope: Scope,
        paths: Vec<PathBuf>,
        import_exts: &[String],
    ) -> Result<commands::CmdResult> {
        commands::import::run(&mut self.store, scope, paths, import_exts)
    }

    pub fn config(&self, scope: Scope, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, scope, action)
    }

    pub fn init(&self, scope: Scope) -> Result<commands::CmdResult> {
        commands::init::run(&self.paths, scope)
    }

    pub fn bank_path(&self, scope: Scope) -> Result<PathBuf> {
        self.store.bank_path(scope)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::list::QuestionFilter;
pub use commands::options::APPEND;
pub use commands::update::QuestionEdit;
pub use commands::{AnswerCheck, BankSummary, CmdMessage, CmdResult, MessageLevel, QuizPaths};
