//! CLI commands for fleet

pub mod clean;
pub mod config;
pub mod create;
pub mod dispatch;
pub mod editor;
pub mod helpers;
pub mod list;
pub mod menu;
pub mod picker;
