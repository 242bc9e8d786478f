//! # Quizbank
//!
//! A library for authoring quiz questions, with a command-line client on top. Questions
//! live in a per-project bank (`.quizbank/questions.json`) or in a global one, and every
//! transformation on them is a pure function over immutable data.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (cli/, wired by main.rs)                               │
//! │  - Parses arguments, prints results, owns exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Thin facade dispatching to commands                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - Load bank, apply pure operations, save, report messages  │
//! └─────────────────────────────────────────────────────────────┘
//!                    │                          │
//!                    ▼                          ▼
//! ┌──────────────────────────────┐  ┌───────────────────────────┐
//! │  Core (question.rs,          │  │  Storage (store/)         │
//! │  collection.rs, model.rs)    │  │  DataStore trait,         │
//! │  - Pure, non-mutating        │  │  FileStore, InMemoryStore │
//! └──────────────────────────────┘  └───────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout or stderr and nothing calls
//! `std::process::exit`. Diagnostics go through the `log` facade; the binary decides
//! where they end up.
//!
//! The `widgets` module is separate from the bank: small practice state machines the
//! CLI can render.
//!
//! ## Testing
//!
//! - Core functions and commands: unit tests next to the code, commands against
//!   `InMemoryStore` built with `store::memory::fixtures::StoreFixture`.
//! - API: dispatch tests.
//! - CLI: argument parsing and rendering unit tests, plus end-to-end runs of the binary
//!   in `tests/`.
//!
//! ## Module Overview
//!
//! - [`model`]: `Question`, `Answer`, `QuestionType`, `Scope`
//! - [`question`]: operations on one question
//! - [`collection`]: operations on a slice of questions
//! - [`commands`]: one module per command
//! - [`api`]: the facade
//! - [`store`]: storage abstraction and implementations
//! - [`config`]: per-scope configuration
//! - [`init`]: scope discovery and context construction
//! - [`widgets`]: practice widgets
//! - [`error`]: error type

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod model;
pub mod question;
pub mod store;
pub mod widgets;
