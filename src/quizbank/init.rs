use crate::api::{QuizApi, QuizPaths};
use crate::config::QuizConfig;
use crate::error::{QuizError, Result};
use crate::model::Scope;
use crate::store::fs::FileStore;
use directories::{BaseDirs, ProjectDirs};
use log::debug;
use std::path::{Path, PathBuf};

pub const STORE_DIR: &str = ".quizbank";
pub const GLOBAL_DATA_ENV: &str = "QUIZBANK_GLOBAL_DATA";

pub struct QuizContext {
    pub api: QuizApi<FileStore>,
    pub scope: Scope,
    pub config: QuizConfig,
}

/// Walk up from `cwd` looking for a directory that holds a `.quizbank` store.
/// Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(STORE_DIR).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// The global data directory, honouring the `QUIZBANK_GLOBAL_DATA` override.
pub fn global_data_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(GLOBAL_DATA_ENV) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "quizbank", "quizbank")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| QuizError::Store("Could not determine the global data directory".into()))
}

pub fn initialize(cwd: &Path, use_global: bool) -> Result<QuizContext> {
    let project_dir = find_project_root(cwd)
        .map(|root| root.join(STORE_DIR))
        .unwrap_or_else(|| cwd.join(STORE_DIR));
    let global_dir = global_data_dir()?;

    let scope = if use_global {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match scope {
        Scope::Project => &project_dir,
        Scope::Global => &global_dir,
    };
    let config = QuizConfig::load(config_dir)?;
    debug!("Using {:?} scope at {}", scope, config_dir.display());

    let store = FileStore::new(Some(project_dir.clone()), global_dir.clone());
    let paths = QuizPaths {
        project: Some(project_dir),
        global: global_dir,
    };
    let api = QuizApi::new(store, paths);

    Ok(QuizContext { api, scope, config })
}
