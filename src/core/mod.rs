//! Core machinery: allocation, name matching, the registry and dispatch.

pub mod arena;
pub mod dispatch;
pub mod names;
pub mod registry;
