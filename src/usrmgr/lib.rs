//! # usrmgr Architecture
//!
//! usrmgr is a **UI-agnostic user-management core**: a table of user records that
//! can be searched, sorted, created, edited, viewed and deleted through a modal
//! form. It is a library that happens to have a terminal client.
//!
//! Records live only in memory. Every session starts from the same two seed
//! records and nothing is written back.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Reads session commands, renders table / dialog / toasts  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Screen (screen.rs) + Dialog (dialog/)                      │
//! │  - Search panel, sort state, row → key resolution           │
//! │  - Create/edit/view state machine and field validation      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - RecordStore: canonical + displayed lists                 │
//! │  - Returns structured CmdResult values                      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) over Storage (store/)        │
//! │  - Pure logic against the DataStore trait                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The dialog never sees the store. The screen opens it with a
//! [`dialog::DialogRequest`] and writes the [`dialog::DialogEvent`] it gets back
//! from a successful submit into the [`api::RecordStore`].
//!
//! ## Module Overview
//!
//! - [`api`]: `RecordStore` facade
//! - [`commands`]: create / update / delete / search / reset
//! - [`store`]: storage abstraction and the in-memory backend
//! - [`model`]: `UserRecord`, `RecordFields`, `Sex`, seed data
//! - [`filter`]: search criteria
//! - [`sort`]: table sort state
//! - [`dialog`]: the modal form and its validation
//! - [`screen`]: binds the above for a UI
//! - [`config`]: display settings
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod dialog;
pub mod error;
pub mod filter;
pub mod model;
pub mod screen;
pub mod sort;
pub mod store;
