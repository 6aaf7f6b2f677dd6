//! # Core Application Logic
//!
//! This module contains Mesa's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (catalog)      │
//!                    │  • Action (intents)     │
//!                    │  • update() (reducer)   │
//!                    │  • filter evaluator     │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    GUI     │      │  storage   │
//!     │  Adapter   │      │  (future)  │      │  (future)  │
//!     │ (ratatui)  │      │            │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` — everything that can happen
//! - [`filter`]: The pure filter evaluator over the catalog
//! - [`model`]: Restaurant records, filter criteria, view modes
//! - [`seed`]: The embedded starter catalog and suggestion vocabularies
//! - [`config`]: `~/.mesa/config.toml` loading and resolution

pub mod action;
pub mod config;
pub mod filter;
pub mod model;
pub mod seed;
pub mod state;
