//! Fleet Core Library
//!
//! Lifecycle engine for fleeting notes: identifier allocation, eligibility
//! rules for listing and cleanup, and the storage boundary they run against.

pub mod config;
pub mod error;
pub mod id;
pub mod lifecycle;
pub mod logging;
pub mod note;
pub mod policy;
pub mod store;
