mod clean;
mod config;
mod create;
mod list;
