//! # Plinko
//!
//! A Plinko board engine: pegs above a row of scoring slots, a ball that
//! bounces left or right at every peg, and an AI that drops where the
//! expected score is highest. Ships with a terminal UI built with Ratatui
//! and a headless simulator.
//!
//! ## Modules
//!
//! - [`game`] — Board grid, transparent-empty traversal, layout generators
//! - [`ai`] — Outcome graph, expected-value engine, agents
//! - [`sim`] — Stochastic fall simulator, scorer, drop statistics
//! - [`session`] — Round and score bookkeeping for front-ends
//! - [`ui`] — Terminal UI: game view and board widget
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod session;
pub mod sim;
pub mod ui;
