//! Fitlog Tools module
//!
//! MCP tool implementations for the fitlog parser.

pub mod catalog;
pub mod parse;
pub mod status;
