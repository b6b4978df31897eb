//! # Core Application Logic
//!
//! This module contains Tally's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Store (file I/O)     │
//!                    │  • Editor (the list)    │
//!                    │  • Action + update()    │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    CLI     │
//!             │  Adapter   │          │ subcommands│
//!             │ (ratatui)  │          │   (clap)   │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`]: `TodoStore` trait and the JSON `FileStore`
//! - [`editor`]: `Editor`, the sole owner of the in-memory list
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update()` reducer
//! - [`config`]: `~/.tally/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod editor;
pub mod state;
pub mod store;
