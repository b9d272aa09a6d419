//! cua - component usage analyzer for React and React Native
//!
//! cua is a CLI tool and library that finds every component declared in a
//! JavaScript/TypeScript source tree and decides, from static evidence alone,
//! whether and where each one is used. File-based routing conventions
//! (Expo Router style) count as usage even when nothing renders the component.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (commands and terminal output)
//! - `config`: Configuration file loading and parsing
//! - `core`: Scan pipeline (discover, collect, track, aggregate)
//! - `output`: Markdown report and graph data renderers
//! - `utils`: Shared path and naming helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod output;
pub mod utils;
