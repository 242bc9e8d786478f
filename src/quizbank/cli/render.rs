use colored::Colorize;
use quizbank::api::{AnswerCheck, BankSummary, CmdMessage, MessageLevel};
use quizbank::config::QuizConfig;
use quizbank::model::Question;
use quizbank::question::to_short_form;
use quizbank::widgets::Widget;
use unicode_width::UnicodeWidthStr;

const PUBLISHED_MARKER: &str = "✓";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// One line per question: short form padded to a common width, then type, points and
/// a marker for published questions.
pub(super) fn render_question_list(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions found.\n".to_string();
    }

    let short_forms: Vec<String> = questions.iter().map(to_short_form).collect();
    let width = short_forms.iter().map(|s| s.width()).max().unwrap_or(0);

    let mut output = String::new();
    for (question, short) in questions.iter().zip(short_forms) {
        let padding = width.saturating_sub(short.width());
        let marker = if question.published {
            PUBLISHED_MARKER.green().to_string()
        } else {
            " ".to_string()
        };
        let points = if question.points == 1 {
            "1 pt".to_string()
        } else {
            format!("{} pts", question.points)
        };
        output.push_str(&format!(
            "{} {}{}  {:<15} {}\n",
            marker,
            short,
            " ".repeat(padding),
            question.question_type.label(),
            points.dimmed()
        ));
    }
    output
}

pub(super) fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

pub(super) fn render_summary(summary: &BankSummary) -> String {
    let same_type = if summary.same_type { "yes" } else { "no" };
    format!(
        "Questions:        {}\nPublished:        {}\nTotal points:     {}\nPublished points: {}\nAll same type:    {}\n",
        summary.questions,
        summary.published,
        summary.total_points,
        summary.published_points,
        same_type
    )
}

pub(super) fn render_check(check: &AnswerCheck) -> String {
    if !check.valid {
        format!("{}\n", "Invalid answer: not one of the options".yellow())
    } else if check.correct {
        format!("{}\n", "Correct!".green())
    } else {
        format!("{}\n", "Incorrect.".red())
    }
}

pub(super) fn render_config(config: &QuizConfig) -> String {
    let lines: Vec<String> = QuizConfig::KEYS
        .iter()
        .filter_map(|key| config.get(key).map(|value| format!("{} = {}", key, value)))
        .collect();
    render_text_list(&lines, "No configuration values.")
}

pub(super) fn render_widget(widget: &dyn Widget) -> String {
    let mut output = format!("{}\n", widget.kind().title().bold());
    for line in widget.render() {
        output.push_str(&format!("  {}\n", line));
    }
    output
}
