//! taskopia - Task Management Library
//!
//! This library provides the core functionality for the taskopia CLI,
//! a task manager with filtering, sorting, and aggregate statistics.
//!
//! # Core Concepts
//!
//! - **Tasks**: records with priority, status, category, optional due date,
//!   and tags; completion is derived from status
//! - **Query Engine**: pure filter/sort/stats functions over a task list
//! - **Store**: an explicit in-memory store owned by the composition root
//! - **Dataset**: a schema-versioned JSON document with atomic writes
//!
//! # Module Organization
//!
//! - `cli`: command-line interface using clap
//! - `config`: configuration loading from `.taskopia.toml`
//! - `dataset`: dataset persistence and the built-in sample tasks
//! - `error`: error types and result aliases
//! - `output`: human/JSON output envelopes and display formatting
//! - `query`: the task query engine (filter, sort, stats)
//! - `store`: in-memory task store with CRUD and id resolution
//! - `task`: the task data model

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod output;
pub mod query;
pub mod store;
pub mod task;

pub use error::{Error, Result};
