use crate::error::{QuizError, Result};
use crate::model::QuestionType;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for a question bank, stored in .quizbank/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuizConfig {
    /// Type given to questions created without an explicit `--type`
    #[serde(default = "default_question_type")]
    pub default_type: QuestionType,

    /// Extensions to look for when importing directories (e.g. ".md")
    #[serde(default = "default_import_ext")]
    pub import_extensions: Vec<String>,
}

fn default_question_type() -> QuestionType {
    QuestionType::ShortAnswerQuestion
}

fn default_import_ext() -> Vec<String> {
    vec![".md".to_string(), ".markdown".to_string(), ".txt".to_string()]
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            default_type: default_question_type(),
            import_extensions: default_import_ext(),
        }
    }
}

impl QuizConfig {
    pub const KEYS: [&'static str; 2] = ["default-type", "import-extensions"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(QuizError::Io)?;
        let config: QuizConfig =
            serde_json::from_str(&content).map_err(QuizError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(QuizError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(QuizError::Serialization)?;
        fs::write(config_path, content).map_err(QuizError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default-type" => Some(self.default_type.to_string()),
            "import-extensions" => Some(self.import_extensions.join(",")),
            _ => None,
        }
    }

    /// Validates and stores `value`. Bad keys or values are `QuizError::Config`.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "default-type" => {
                self.default_type = value.parse().map_err(QuizError::Config)?;
                Ok(())
            }
            "import-extensions" => {
                let exts: Vec<String> = value
                    .split(',')
                    .map(str::trim)
                    .filter(|ext| !ext.is_empty())
                    .map(normalize_ext)
                    .collect();
                if exts.is_empty() {
                    return Err(QuizError::Config(
                        "import-extensions needs at least one extension".to_string(),
                    ));
                }
                self.import_extensions = exts;
                Ok(())
            }
            other => Err(QuizError::Config(format!("Unknown config key: {}", other))),
        }
    }
}

/// Ensures an extension starts with a dot.
fn normalize_ext(ext: &str) -> String {
    if ext.starts_with('.') {
        ext.to_string()
    } else {
        format!(".{}", ext)
    }
}
