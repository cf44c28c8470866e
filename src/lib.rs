//! # smed
//!
//! A command-line tool for editing AWS Secrets Manager secrets in a local
//! text editor.
//!
//! This library provides functionality to:
//! - List secret names, optionally filtered
//! - Print secret values as indented JSON
//! - Create and edit secrets through an editor round trip on a temporary file
//!
//! ## Modules
//!
//! - [`app`] - Command dispatch and per-secret outcomes
//! - [`app_deps`] - Store and editor seams, with their real implementations
//! - [`cli`] - Command-line parsing and command resolution
//! - [`store`] - AWS Secrets Manager client
//! - [`edit`] - The temporary file and editor round trip
//! - [`view`] - JSON formatting for display
//! - [`config`] - Settings from environment and command line
//! - [`paths`] - Optional `.env` discovery
//! - [`validation`] - Secret name validation
//! - [`error`] - Error formatting utilities
//! - [`errors`] - Structured error types
//! - [`constants`] - Application constants

pub mod app;
pub mod app_deps;
pub mod cli;
pub mod config;
pub mod constants;
pub mod edit;
pub mod error;
pub mod errors;
pub mod paths;
pub mod store;
pub mod validation;
pub mod view;
