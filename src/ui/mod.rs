//! GUI module for N-in-a-row
//!
//! A native front end built on egui/eframe. It owns a [`crate::GameSession`]
//! and only talks to it through the session's public operations.

mod app;
mod board_view;
mod theme;

pub use app::{NinarowApp, SetupForm};
