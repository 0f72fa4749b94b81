//! Onet-style tile-matching game engine.
//!
//! The engine owns all game state: the paired grid, the empty-corridor
//! connectivity rule, scoring, level progression, and the countdown. A
//! UI layer drives it through `core::Session` (or `engine::clock` for a
//! wall-clock timer thread) and renders from read-only snapshots; it
//! never holds authoritative state of its own.

pub mod core;
pub mod engine;
pub mod types;
