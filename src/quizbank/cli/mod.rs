//! # CLI
//!
//! One client of the quizbank library. Argument parsing lives in `setup`, dispatch in
//! `commands` and terminal formatting in `render`.
//!
//! Running `quizbank` with no subcommand lists the active bank.

mod commands;
mod render;
pub mod setup;

pub use commands::run;
