//! # Todoz Architecture
//!
//! Todoz is a **UI-agnostic todo-list data layer**. This is not an
//! application that happens to have some library code—it's a library meant
//! to sit under any presentation layer (CLI, TUI, web), which is why no
//! module here ever touches a terminal or a file.
//!
//! ## The Three-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Pure business logic                                      │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract TodoStore trait                                 │
//! │  - InMemoryStore (the data layer is in-memory by design)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The projection engine ([`view`]) sits beside the command layer: commands
//! use it to turn the store's records into the filtered, sorted sequences a
//! UI displays. [`options`] exposes the static filter/sort catalogs a
//! selection UI offers.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** assumes a terminal environment
//!
//! Invalid user input (blank todo text) is reported the same way: as an
//! error-level message inside a successful `CmdResult`, for the UI to
//! surface however it likes. The `Err` channel is reserved for genuine
//! faults.
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): Thorough unit tests of business
//!    logic against `InMemoryStore`. This is where the lion's share of
//!    testing lives.
//! 2. **Projection** (`view.rs`): Pure-function tests of filtering,
//!    sorting, and their composition.
//! 3. **API** (`api.rs`): Dispatch tests—right command, right arguments,
//!    right return shape.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction and the in-memory implementation
//! - [`model`]: The core data type ([`model::Todo`]) and text normalization
//! - [`view`]: The projection engine (filtering and sorting)
//! - [`options`]: Static filter/sort catalogs for selection UI
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod error;
pub mod model;
pub mod options;
pub mod store;
pub mod view;
