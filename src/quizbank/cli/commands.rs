//! # CLI Layer
//!
//! The only place that knows about terminal I/O, argument parsing and exit codes.
//!
//! - `run()`: main dispatch (called by `main.rs`)
//! - `init_context()`: logging setup plus the API, scope and configuration
//! - `handle_*()`: per-command handlers that call the API and print the result

use super::render::{
    print_messages, render_check, render_config, render_question_list, render_summary,
    render_text_list, render_widget,
};
use super::setup::{
    print_grouped_help, print_help_for_command, print_subcommand_help, BankCommands, Cli,
    Commands, CoreCommands, MiscCommands, QuestionCommands,
};
use clap::Parser;
use log::{debug, LevelFilter};
use quizbank::api::{ConfigAction, QuestionEdit, QuestionFilter, QuizApi, APPEND};
use quizbank::collection::get_names;
use quizbank::error::{QuizError, Result};
use quizbank::init::initialize;
use quizbank::model::{QuestionType, Scope};
use quizbank::store::fs::FileStore;
use quizbank::widgets::{self, WidgetKind};
use std::path::PathBuf;

struct AppContext {
    api: QuizApi<FileStore>,
    scope: Scope,
    default_type: QuestionType,
    import_extensions: Vec<String>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Top level gets the grouped help, subcommands use clap's rendering
    if cli.help {
        if cli.command.is_none() {
            print_grouped_help();
        } else {
            print_subcommand_help(&cli.command);
        }
        return Ok(());
    }

    init_logging(cli.verbose);

    // Commands that never touch a bank
    match &cli.command {
        Some(Commands::Misc(MiscCommands::Widget { kind, actions })) => {
            return handle_widget(kind.as_deref(), actions);
        }
        Some(Commands::Misc(MiscCommands::Help { command })) => {
            return handle_help(command.as_deref());
        }
        _ => {}
    }

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Core(cmd)) => match cmd {
            CoreCommands::Create {
                question_type,
                id,
                name,
            } => handle_create(&mut ctx, name.join(" "), question_type, id),
            CoreCommands::List {
                published,
                non_empty,
                names,
            } => handle_list(&ctx, published, non_empty, names),
            CoreCommands::View { ids } => handle_view(&ctx, &ids),
        },
        Some(Commands::Question(cmd)) => match cmd {
            QuestionCommands::Rename { id, name } => handle_rename(&mut ctx, id, name.join(" ")),
            QuestionCommands::Publish { id, all } => handle_publish(&mut ctx, id, all),
            QuestionCommands::Duplicate { target, new_id } => {
                handle_duplicate(&mut ctx, target, new_id)
            }
            QuestionCommands::Retype { id, question_type } => {
                handle_retype(&mut ctx, id, question_type)
            }
            QuestionCommands::EditOption { id, text, index } => {
                handle_option(&mut ctx, id, &text, index)
            }
            QuestionCommands::Set {
                id,
                body,
                expected,
                points,
            } => handle_set(
                &mut ctx,
                id,
                QuestionEdit {
                    body,
                    expected,
                    points,
                },
            ),
            QuestionCommands::Merge {
                source,
                name,
                points,
                new_id,
            } => handle_merge(&mut ctx, source, name.join(" "), points, new_id),
            QuestionCommands::Delete { ids } => handle_delete(&mut ctx, &ids),
            QuestionCommands::Check { id, answer } => handle_check(&ctx, id, answer.join(" ")),
        },
        Some(Commands::Bank(cmd)) => match cmd {
            BankCommands::Stats => handle_stats(&ctx),
            BankCommands::Csv => handle_csv(&ctx),
            BankCommands::Answers { published } => handle_answers(&ctx, published),
            BankCommands::Export { out } => handle_export(&ctx, out),
            BankCommands::Import { paths } => handle_import(&mut ctx, paths),
        },
        Some(Commands::Misc(cmd)) => match cmd {
            MiscCommands::Config { key, value } => handle_config(&ctx, key, value),
            MiscCommands::Init => handle_init(&ctx),
            MiscCommands::Widget { kind, actions } => handle_widget(kind.as_deref(), &actions),
            MiscCommands::Help { command } => handle_help(command.as_deref()),
        },
        None => handle_list(&ctx, false, false, false),
    }
}

/// `RUST_LOG` wins unless `--verbose` asks for debug output.
fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.format_timestamp(None).try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let ctx = initialize(&cwd, cli.global)?;
    debug!("Bank file: {}", ctx.api.bank_path(ctx.scope)?.display());

    Ok(AppContext {
        api: ctx.api,
        scope: ctx.scope,
        default_type: ctx.config.default_type,
        import_extensions: ctx.config.import_extensions,
    })
}

fn handle_create(
    ctx: &mut AppContext,
    name: String,
    question_type: Option<QuestionType>,
    id: Option<i64>,
) -> Result<()> {
    if name.trim().is_empty() {
        return Err(QuizError::Api("Name cannot be empty".into()));
    }
    let question_type = question_type.unwrap_or(ctx.default_type);
    let result = ctx
        .api
        .create_question(ctx.scope, name, question_type, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, published: bool, non_empty: bool, names: bool) -> Result<()> {
    let filter = QuestionFilter {
        published_only: published,
        non_empty_only: non_empty,
    };
    let result = ctx.api.list_questions(ctx.scope, filter)?;

    let output = if names {
        render_text_list(&get_names(&result.listed_questions), "No questions found.")
    } else {
        render_question_list(&result.listed_questions)
    };
    print!("{}", output);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[i64]) -> Result<()> {
    let result = ctx.api.view_questions(ctx.scope, ids)?;
    if let Some(markdown) = &result.rendered {
        println!("{}", markdown);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_rename(ctx: &mut AppContext, id: i64, name: String) -> Result<()> {
    let result = ctx.api.rename_question(ctx.scope, id, &name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_publish(ctx: &mut AppContext, id: Option<i64>, all: bool) -> Result<()> {
    let result = match (id, all) {
        (_, true) => ctx.api.publish_all(ctx.scope)?,
        (Some(id), false) => ctx.api.toggle_published(ctx.scope, id)?,
        (None, false) => return Err(QuizError::Api("Give a question id or --all".into())),
    };
    print_messages(&result.messages);
    Ok(())
}

fn handle_duplicate(ctx: &mut AppContext, target: i64, new_id: Option<i64>) -> Result<()> {
    let result = ctx.api.duplicate_question(ctx.scope, target, new_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_retype(ctx: &mut AppContext, id: i64, question_type: QuestionType) -> Result<()> {
    let result = ctx.api.change_type(ctx.scope, id, question_type)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_option(ctx: &mut AppContext, id: i64, text: &str, index: Option<isize>) -> Result<()> {
    let result = ctx
        .api
        .edit_option(ctx.scope, id, index.unwrap_or(APPEND), text)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_set(ctx: &mut AppContext, id: i64, edit: QuestionEdit) -> Result<()> {
    let result = ctx.api.update_question(ctx.scope, id, &edit)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_merge(
    ctx: &mut AppContext,
    source: i64,
    name: String,
    points: Option<u32>,
    new_id: Option<i64>,
) -> Result<()> {
    let result = ctx
        .api
        .merge_question(ctx.scope, source, &name, points, new_id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: &[i64]) -> Result<()> {
    let result = ctx.api.delete_questions(ctx.scope, ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &AppContext, id: i64, answer: String) -> Result<()> {
    let result = ctx.api.check_answer(ctx.scope, id, &answer)?;
    if let Some(check) = &result.check {
        print!("{}", render_check(check));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.stats(ctx.scope)?;
    if let Some(summary) = &result.summary {
        print!("{}", render_summary(summary));
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_csv(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.export_csv(ctx.scope)?;
    if let Some(csv) = &result.rendered {
        println!("{}", csv);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_answers(ctx: &AppContext, published: bool) -> Result<()> {
    let result = ctx.api.answers(ctx.scope, published)?;
    println!("{}", serde_json::to_string_pretty(&result.answers)?);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let out_dir = match out {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };
    let result = ctx.api.export_archive(ctx.scope, &out_dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, paths: Vec<PathBuf>) -> Result<()> {
    let result = ctx
        .api
        .import_questions(ctx.scope, paths, &ctx.import_extensions)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let show_all = key.is_none();
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config(ctx.scope, action)?;
    if show_all {
        if let Some(config) = &result.config {
            print!("{}", render_config(config));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.init(ctx.scope)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_widget(kind: Option<&str>, actions: &[String]) -> Result<()> {
    match kind {
        Some(kind) => {
            let kind: WidgetKind = kind.parse()?;
            let widget = widgets::replay(kind, actions)?;
            print!("{}", render_widget(&*widget));
        }
        None => {
            let page: Vec<String> = widgets::page()
                .iter()
                .map(|widget| render_widget(&**widget))
                .collect();
            print!("{}", page.join("\n"));
        }
    }
    Ok(())
}

fn handle_help(command: Option<&str>) -> Result<()> {
    match command {
        Some(cmd) => print_help_for_command(cmd),
        None => print_grouped_help(),
    }
    Ok(())
}
