//! # Bijou Architecture
//!
//! Bijou holds the content and pricing logic shared by a jewelry storefront and
//! its admin dashboard: rendering rich-text product descriptions written in the
//! dashboard's editor, and pricing a product across a metal's purity levels.
//! It is a library that happens to have a CLI client, not the other way round.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (main.rs, args.rs, logging.rs)                         │
//! │  - Reads files, prints results, owns exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Normalizes raw inputs (karat strings, JSON payloads)     │
//! │  - Returns structured Result<CmdResult>                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, no terminal I/O                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core (richtext/, description.rs, metal/)                   │
//! │  - Pure functions over typed models, never fail             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Degrading Instead of Failing
//!
//! Descriptions and metals are typed in by people through web forms, so the
//! core never returns errors for bad content. An unreadable description renders
//! as [`description::NO_DESCRIPTION`], an unknown editor node renders its
//! children, and an unreadable price multiplier counts as `1.0`. Errors
//! ([`error::BijouError`]) are reserved for the outer layers: files, config,
//! and arguments that cannot be interpreted at all.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`richtext`]: Editor node model, HTML renderer, plain-text extraction
//! - [`description`]: Classification of product description fields
//! - [`metal`]: Metals, purity levels, cumulative pricing and validation
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod description;
pub mod error;
mod lenient;
pub mod metal;
pub mod richtext;
