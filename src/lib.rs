//! golinks - a go-link redirector
//!
//! Maps short mnemonic keys (`go/wiki`) to destination URLs, records every
//! resolution and exposes CRUD plus usage analytics over HTTP and the CLI.
//!
//! # Architecture
//! - `storage`: SeaORM link table and usage log
//! - `services`: validation, redirect resolution, analytics
//! - `api`: actix-web handlers and the routing table
//! - `interfaces`: command-line commands
//! - `config`: TOML + environment configuration
//! - `runtime`: startup, shutdown and execution modes
//! - `system`: logging

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
