use super::DataStore;
use crate::error::Result;
use crate::model::{Question, Scope};
use std::collections::HashMap;
use std::path::PathBuf;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    banks: HashMap<Scope, Vec<Question>>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of times a bank was written, so tests can assert that no-op commands
    /// leave storage alone.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl DataStore for InMemoryStore {
    fn load_questions(&self, scope: Scope) -> Result<Vec<Question>> {
        Ok(self.banks.get(&scope).cloned().unwrap_or_default())
    }

    fn save_questions(&mut self, questions: &[Question], scope: Scope) -> Result<()> {
        self.banks.insert(scope, questions.to_vec());
        self.saves += 1;
        Ok(())
    }

    fn bank_path(&self, scope: Scope) -> Result<PathBuf> {
        let name = match scope {
            Scope::Project => "project",
            Scope::Global => "global",
        };
        Ok(PathBuf::from(format!("memory://{}/questions.json", name)))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::QuestionType;
    use crate::question::make_blank_question;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        questions: Vec<Question>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                questions: Vec::new(),
            }
        }

        /// Fixture ids run 1, 2, 3, ... in insertion order.
        fn next_id(&self) -> i64 {
            self.questions.len() as i64 + 1
        }

        pub fn with_short_answer(mut self, name: &str, expected: &str) -> Self {
            let mut q = make_blank_question(self.next_id(), name, QuestionType::ShortAnswerQuestion);
            q.body = format!("Body of {}", name);
            q.expected = expected.to_string();
            self.questions.push(q);
            self
        }

        pub fn with_multiple_choice(mut self, name: &str, options: &[&str], expected: &str) -> Self {
            let mut q =
                make_blank_question(self.next_id(), name, QuestionType::MultipleChoiceQuestion);
            q.body = format!("Body of {}", name);
            q.options = options.iter().map(|o| o.to_string()).collect();
            q.expected = expected.to_string();
            self.questions.push(q);
            self
        }

        pub fn with_blank(mut self, name: &str) -> Self {
            let q = make_blank_question(self.next_id(), name, QuestionType::ShortAnswerQuestion);
            self.questions.push(q);
            self
        }

        pub fn published(mut self) -> Self {
            if let Some(last) = self.questions.last_mut() {
                last.published = true;
            }
            self
        }

        pub fn worth(mut self, points: u32) -> Self {
            if let Some(last) = self.questions.last_mut() {
                last.points = points;
            }
            self
        }

        /// Writes the collected questions into the project scope and returns the store
        /// with its save counter reset.
        pub fn build(self) -> InMemoryStore {
            let mut store = self.store;
            store.banks.insert(Scope::Project, self.questions);
            store.saves = 0;
            store
        }
    }
}
