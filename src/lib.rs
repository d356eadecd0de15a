//! Palettesmith Library
//!
//! This library provides the color theory engine behind Palettesmith:
//! hex/RGB/HSL conversion, harmony derivation, tonal shade ramps, contrast
//! grading, palette generation and code export, plus the CLI and web
//! surfaces built on top of them.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod export;
pub mod models;
pub mod services;
pub mod theory;

#[cfg(feature = "web")]
pub mod web;
