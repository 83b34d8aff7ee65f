//! # Gitc CLI Library
//!
//! Command definitions and handlers for the gitc command-line tool.

pub mod cli;
