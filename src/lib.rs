//! Triluna - terminal client for the Códice Triluna cultivation RPG
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input_history;
pub mod logging;
pub mod models;
pub mod session;
pub mod sse;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod widgets;
