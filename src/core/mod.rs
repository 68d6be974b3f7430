//! # Core Application Logic
//!
//! noteme's session logic. It knows nothing about any specific UI technology
//! and performs no I/O: storage work leaves as a `Command` and comes back as
//! an `Action`.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (App, views)   │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┴───────────────────┐
//!            ▼                                       ▼
//!     ┌────────────┐                          ┌────────────┐
//!     │    TUI     │                          │  Pipeline  │
//!     │  Adapter   │                          │  (storage  │
//!     │ (ratatui)  │                          │  commands) │
//!     └────────────┘                          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`model`]: `Note`, `Todo`, `Frequency`, the persisted records
//! - [`state`]: The `App` struct, all session state in one place
//! - [`action`]: The `Action` enum and `update()`
//! - [`projection`]: Display rows and list cursors
//! - [`text_field`]: Editable text buffers
//! - [`config`]: Settings file, env vars and CLI resolution

pub mod action;
pub mod config;
pub mod model;
pub mod projection;
pub mod state;
pub mod text_field;
