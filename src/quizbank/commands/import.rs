use crate::commands::{CmdMessage, CmdResult};
use crate::error::{QuizError, Result};
use crate::model::{Question, QuestionType, Scope};
use crate::question::make_blank_question;
use crate::store::DataStore;
use log::{debug, warn};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::fs;
use std::path::{Path, PathBuf};

use super::helpers::{next_id, save_bank};

/// Question content recovered from a markdown document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuestion {
    pub name: String,
    pub body: String,
    pub options: Vec<String>,
}

impl ParsedQuestion {
    fn into_question(self, id: i64) -> Question {
        let question_type = if self.options.is_empty() {
            QuestionType::ShortAnswerQuestion
        } else {
            QuestionType::MultipleChoiceQuestion
        };
        Question {
            body: self.body,
            options: self.options,
            ..make_blank_question(id, self.name, question_type)
        }
    }
}

pub fn run<S: DataStore>(
    store: &mut S,
    scope: Scope,
    paths: Vec<PathBuf>,
    import_exts: &[String],
) -> Result<CmdResult> {
    let mut questions = store.load_questions(scope)?;
    let mut result = CmdResult::default();

    for file in collect_files(&paths, import_exts)? {
        let content = fs::read_to_string(&file).map_err(QuizError::Io)?;
        match parse_markdown(&content) {
            Some(parsed) => {
                let question = parsed.into_question(next_id(&questions)?);
                debug!("Imported {} as question {}", file.display(), question.id);
                result.add_message(CmdMessage::success(format!(
                    "Imported ({}): {}",
                    question.id, question.name
                )));
                result.affected_questions.push(question.clone());
                questions.push(question);
            }
            None => {
                warn!("No level-1 heading in {}", file.display());
                result.add_message(CmdMessage::warning(format!(
                    "Skipped {}: no '# ' heading",
                    file.display()
                )));
            }
        }
    }

    if result.affected_questions.is_empty() {
        result.add_message(CmdMessage::info("No questions imported."));
    } else {
        save_bank(store, scope, &questions)?;
    }
    Ok(result)
}

/// Expands directories (one level deep, sorted by name) into files with a matching
/// extension. Explicit file paths are always kept.
fn collect_files(paths: &[PathBuf], import_exts: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let mut entries: Vec<PathBuf> = fs::read_dir(path)
                .map_err(QuizError::Io)?
                .filter_map(|entry| entry.ok().map(|e| e.path()))
                .filter(|p| p.is_file() && has_extension(p, import_exts))
                .collect();
            entries.sort();
            files.extend(entries);
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(QuizError::Api(format!(
                "Path not found: {}",
                path.display()
            )));
        }
    }
    Ok(files)
}

fn has_extension(path: &Path, exts: &[String]) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .is_some_and(|ext| exts.iter().any(|e| e.to_lowercase() == ext))
}

/// Reads the layout produced by [`crate::question::to_markdown`]: the first level-1
/// heading is the name, paragraphs after it form the body and top-level list items
/// become options. Returns `None` when there is no level-1 heading.
pub fn parse_markdown(content: &str) -> Option<ParsedQuestion> {
    let mut name: Option<String> = None;
    let mut heading: Option<String> = None;
    let mut paragraph: Option<String> = None;
    let mut item: Option<String> = None;
    let mut item_depth = 0usize;
    let mut paragraphs = Vec::new();
    let mut options = Vec::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) if name.is_none() => heading = Some(String::new()),
            Event::End(TagEnd::Heading(_)) => {
                if let Some(text) = heading.take() {
                    name = Some(text.trim().to_string());
                }
            }
            Event::Start(Tag::Item) => {
                item_depth += 1;
                if item_depth == 1 {
                    item = Some(String::new());
                }
            }
            Event::End(TagEnd::Item) => {
                if item_depth == 1 {
                    if let Some(text) = item.take() {
                        options.push(text.trim().to_string());
                    }
                }
                item_depth = item_depth.saturating_sub(1);
            }
            Event::Start(Tag::Paragraph) if item_depth == 0 && name.is_some() => {
                paragraph = Some(String::new())
            }
            Event::End(TagEnd::Paragraph) => {
                if let Some(text) = paragraph.take() {
                    paragraphs.push(text);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(buf) = active_buffer(&mut heading, &mut item, &mut paragraph) {
                    buf.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                let sep = if heading.is_none() && item.is_none() { '\n' } else { ' ' };
                if let Some(buf) = active_buffer(&mut heading, &mut item, &mut paragraph) {
                    buf.push(sep);
                }
            }
            _ => {}
        }
    }

    name.map(|name| ParsedQuestion {
        name,
        body: paragraphs.join("\n"),
        options,
    })
}

fn active_buffer<'a>(
    heading: &'a mut Option<String>,
    item: &'a mut Option<String>,
    paragraph: &'a mut Option<String>,
) -> Option<&'a mut String> {
    heading
        .as_mut()
        .or(item.as_mut())
        .or(paragraph.as_mut())
}
