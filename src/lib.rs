//! # Minefield
//!
//! A terminal traversal game: cross a square board from one edge to the
//! opposite edge while avoiding randomly placed mines, with a limited number
//! of lives. Text I/O and randomness are injected capabilities, so the board
//! generation and the game state machine stay deterministic and unit-testable.
//!
//! ## Modules
//!
//! - [`board`] — Mine layout: generation algorithm and point queries
//! - [`game`] — Session state machine: setup, play loop, win/lose detection
//! - [`console`] — Text I/O capability and the crossterm-backed terminal impl
//! - [`random`] — Random sort-key capability and the rand-backed impl
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod game;
pub mod random;
