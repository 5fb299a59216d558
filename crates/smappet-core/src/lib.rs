//! Casing-aware snippet templates.
//!
//! `smappet-core` turns concrete text into a reusable template by finding
//! every casing of a set of variable names and wrapping each occurrence in a
//! marker that records the casing:
//!
//! ```text
//! const USER_NAME = getUserName();
//! const {{#constantCase}}userName{{/constantCase}} = get{{#pascalCase}}userName{{/pascalCase}}();
//! ```
//!
//! Applying the template with a new value re-renders every marker in its
//! recorded casing.
//!
//! # Example
//!
//! ```rust
//! use smappet_core::Engine;
//!
//! let engine = Engine::new();
//! let template = engine
//!     .capture(Some("let userName = USER_NAME;"), Some("userName"))
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(
//!     template,
//!     "let {{#camelCase}}userName{{/camelCase}} = {{#constantCase}}userName{{/constantCase}};"
//! );
//!
//! let text = engine.apply(Some(template.as_str()), Some("first name")).unwrap().unwrap();
//! assert_eq!(text, "let firstName = FIRST_NAME;");
//! ```
//!
//! # Architecture
//!
//! ```text
//! Engine
//! ├── capture → Tagger     (casing variants → markers)
//! └── apply   → scan       (marker contents → variable names)
//!               substitute (variable names → values)
//!               Renderer   (markers → cased values)
//! ```

pub mod casing;
mod config;
mod engine;
mod error;
pub mod marker;
mod render;
mod scanner;
mod substitute;
mod tagger;

pub use casing::Casing;
pub use config::EngineConfig;
pub use engine::{parse_names, parse_values, Engine};
pub use error::{Result, TemplateError};
pub use render::{render, Renderer, UnknownMarker};
pub use scanner::{scan, scan_strict};
pub use substitute::{substitute, ValueMapping};
pub use tagger::{tag, Tagger};
