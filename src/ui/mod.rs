//! User interface layer
//!
//! This module contains the terminal UI application.

pub mod tui_app;
