//! # Connect Four Minimax
//!
//! Connect Four against a computer opponent that searches the game tree with
//! depth-limited minimax and alpha-beta pruning, scoring positions with a
//! fixed line-of-four heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Board, line enumeration and win detection, players, game state
//! - [`ai`] — Heuristic evaluator, minimax search, agents
//! - [`ui`] — Terminal UI and headless console game
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
