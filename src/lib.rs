//! Diff Desk library
//!
//! The compare core, JSON tools and history stores carry no UI dependency;
//! the `ui` and `app` modules build the desktop shell on top of them.

pub mod app;
pub mod backend;
pub mod compare;
pub mod config;
pub mod constant;
pub mod json;
pub mod messages;
pub mod style;
pub mod ui;
