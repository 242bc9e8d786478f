use crate::collection::to_csv;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuizError, Result};
use crate::model::{Question, Scope};
use crate::question::to_markdown;
use crate::store::DataStore;
use chrono::Utc;
use flate2::write::GzEncoder;
use flate2::Compression;
use log::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// The bank as CSV text.
pub fn csv<S: DataStore>(store: &S, scope: Scope) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;
    Ok(CmdResult::default().with_rendered(to_csv(&questions)))
}

/// Writes a `.tar.gz` archive holding `questions.csv` and one markdown file per
/// question into `out_dir`.
pub fn archive<S: DataStore>(store: &S, scope: Scope, out_dir: &Path) -> Result<CmdResult> {
    let questions = store.load_questions(scope)?;

    if questions.is_empty() {
        let mut res = CmdResult::default();
        res.add_message(CmdMessage::info("No questions to export."));
        return Ok(res);
    }

    let now = Utc::now();
    let filename = format!("quizbank-{}.tar.gz", now.format("%Y-%m-%d_%H-%M-%S"));
    let path = out_dir.join(filename);
    let file = File::create(&path).map_err(QuizError::Io)?;

    write_archive(file, &questions)?;
    info!("Exported {} questions to {}", questions.len(), path.display());

    let mut result = CmdResult::default().with_affected_questions(questions);
    result.add_message(CmdMessage::success(format!(
        "Exported to {}",
        path.display()
    )));
    Ok(result)
}

fn write_archive<W: Write>(writer: W, questions: &[Question]) -> Result<()> {
    let enc = GzEncoder::new(writer, Compression::default());
    let mut tar = tar::Builder::new(enc);

    append_entry(&mut tar, "quizbank/questions.csv", &to_csv(questions))?;
    for q in questions {
        let entry_name = format!(
            "quizbank/questions/{}-{}.md",
            q.id,
            sanitize_filename(&q.name)
        );
        append_entry(&mut tar, &entry_name, &to_markdown(q))?;
    }

    let enc = tar.into_inner().map_err(QuizError::Io)?;
    enc.finish().map_err(QuizError::Io)?;
    Ok(())
}

fn append_entry<W: Write>(tar: &mut tar::Builder<W>, name: &str, content: &str) -> Result<()> {
    let mut header = tar::Header::new_gnu();
    header.set_size(content.len() as u64);
    header.set_mode(0o644);
    header.set_cksum();
    tar.append_data(&mut header, name, content.as_bytes())
        .map_err(QuizError::Io)
}

fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_matches('_').to_string();
    if cleaned.is_empty() {
        "untitled".to_string()
    } else {
        cleaned
    }
}
