// src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod cli;
pub mod config;
pub mod logger;
pub mod presentation;
pub mod version;

pub use version::VERSION;
