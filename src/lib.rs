//! Shortdash - terminal dashboard client for a URL-shortening service
//!
//! This library provides the core functionality for the shortdash client:
//! the REST API client, the click-statistics aggregation, the view-state
//! layer and the user interfaces.
//!
//! # Features
//! - **cli**: one-shot command-line interface (default)
//! - **tui**: interactive terminal dashboard
//! - **full**: all features enabled
//!
//! # Architecture
//! - `client`: API client and wire DTOs for the four dashboard endpoints
//! - `stats`: date-bucketed click aggregation and the period state machine
//! - `views`: per-screen view state, fetch descriptors and response folding
//! - `interfaces`: user interfaces (CLI, TUI) applying view state to output
//! - `config`: configuration management
//! - `utils`: formatting and input validation helpers

pub mod cli;
pub mod client;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod stats;
pub mod utils;
pub mod views;
