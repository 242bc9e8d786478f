use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown widget: {0}")]
    UnknownWidget(String),

    #[error("Widget {widget} has no action '{action}'")]
    UnknownAction { widget: String, action: String },
}

pub type Result<T> = std::result::Result<T, QuizError>;
