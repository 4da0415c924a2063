//! Fitlog Library
//!
//! Natural language parsing of food, water and workout log entries.

pub mod ai;
pub mod build_info;
pub mod catalog;
pub mod config;
pub mod mcp;
pub mod models;
pub mod parser;
pub mod tools;
pub mod units;
