// Public API exports (shared between web and desktop)
pub mod config;
pub mod domain;
pub mod shared;

pub mod app;
