use super::DataStore;
use crate::error::{QuizError, Result};
use crate::model::{Question, Scope};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

const BANK_FILENAME: &str = "questions.json";

pub struct FileStore {
    project_root: Option<PathBuf>,
    global_root: PathBuf,
}

impl FileStore {
    pub fn new(project_root: Option<PathBuf>, global_root: PathBuf) -> Self {
        Self {
            project_root,
            global_root,
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(QuizError::Io)?;
        }
        Ok(())
    }

    fn get_store_path(&self, scope: Scope) -> Result<PathBuf> {
        let root = match scope {
            Scope::Project => self.project_root.as_ref().ok_or_else(|| {
                QuizError::Store("No project scope available".to_string())
            })?,
            Scope::Global => &self.global_root,
        };
        Ok(root.clone())
    }
}

impl DataStore for FileStore {
    fn load_questions(&self, scope: Scope) -> Result<Vec<Question>> {
        let bank_file = self.bank_path(scope)?;
        if !bank_file.exists() {
            debug!("No bank at {}, starting empty", bank_file.display());
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&bank_file).map_err(QuizError::Io)?;
        let questions: Vec<Question> =
            serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        debug!(
            "Loaded {} questions from {}",
            questions.len(),
            bank_file.display()
        );
        Ok(questions)
    }

    fn save_questions(&mut self, questions: &[Question], scope: Scope) -> Result<()> {
        let root = self.get_store_path(scope)?;
        self.ensure_dir(&root)?;

        let bank_file = root.join(BANK_FILENAME);
        let content = serde_json::to_string_pretty(questions).map_err(QuizError::Serialization)?;
        fs::write(&bank_file, content).map_err(QuizError::Io)?;
        debug!(
            "Saved {} questions to {}",
            questions.len(),
            bank_file.display()
        );
        Ok(())
    }

    fn bank_path(&self, scope: Scope) -> Result<PathBuf> {
        Ok(self.get_store_path(scope)?.join(BANK_FILENAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::QuestionType;
    use crate::question::make_blank_question;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> FileStore {
        FileStore::new(
            Some(temp.path().join("project")),
            temp.path().join("global"),
        )
    }

    #[test]
    fn missing_bank_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert!(store.load_questions(Scope::Project).unwrap().is_empty());
        assert!(store.load_questions(Scope::Global).unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        let mut store = store_in(&temp);
        let questions = vec![
            make_blank_question(3, "Third", QuestionType::ShortAnswerQuestion),
            make_blank_question(1, "First", QuestionType::MultipleChoiceQuestion),
        ];
        store.save_questions(&questions, Scope::Project).unwrap();

        assert!(temp.path().join("project").join("questions.json").exists());
        assert_eq!(store.load_questions(Scope::Project).unwrap(), questions);
        assert!(store.load_questions(Scope::Global).unwrap().is_empty());
    }

    #[test]
    fn project_scope_requires_root() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(None, temp.path().to_path_buf());
        assert!(matches!(
            store.load_questions(Scope::Project),
            Err(QuizError::Store(_))
        ));
    }

    #[test]
    fn corrupt_bank_is_a_serialization_error() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        fs::create_dir_all(temp.path().join("global")).unwrap();
        fs::write(temp.path().join("global").join("questions.json"), "not json").unwrap();
        assert!(matches!(
            store.load_questions(Scope::Global),
            Err(QuizError::Serialization(_))
        ));
    }
}
