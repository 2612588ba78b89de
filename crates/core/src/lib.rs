//! Core library: scanning, classification, filtering, and chunk serialization.

pub mod classifier;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod naming;
pub mod pipeline;
pub mod record;
pub mod scanner;
