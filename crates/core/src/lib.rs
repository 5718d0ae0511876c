//! hbrender Core Library
//!
//! This crate provides the core functionality for hbrender, a tool that renders
//! a Handlebars template against variables read from a YAML or JSON file.
//!
//! # Key Features
//!
//! - **Variable Loading**: Decode YAML or JSON variables files into a typed context
//! - **Template Rendering**: Parse and execute templates through a swappable engine
//! - **Configuration**: Resolve template and variables paths once at startup
//! - **Error Handling**: One error type classifying every failure of a render
//!
//! # Examples
//!
//! Rendering a template file with its variables:
//!
//! ```no_run
//! use hbrender_core::config::RenderConfig;
//! use hbrender_core::engine::{EngineOptions, HandlebarsEngine};
//! use hbrender_core::render::render_files;
//!
//! let config = RenderConfig::new(
//!     &Some("nginx.conf.hbs".to_string()),
//!     &Some("production.yml".to_string()),
//!     EngineOptions::default(),
//! )?;
//! let mut engine = HandlebarsEngine::new(config.options);
//! let rendered = render_files(&mut engine, &config)?;
//! print!("{}", String::from_utf8_lossy(&rendered));
//! # Ok::<(), hbrender_core::error::Error>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod file_handling;
pub mod render;
pub mod variables;
