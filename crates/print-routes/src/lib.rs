//! Startup route table output for web application servers.
//!
//! print-routes watches every route a host server registers during startup
//! and, once the host signals readiness, prints a bordered table of all
//! visible routes: HTTP methods, path (with highlighted parameter
//! segments), an optional description column and an optional query-string
//! template.
//!
//! # Quick Start
//!
//! ```rust
//! use print_routes::prelude::*;
//!
//! let reporter = RouteReporter::new(ReporterConfig::new().use_colors(false));
//!
//! // One call per route the host registers...
//! reporter.record(RouteRecord::new("/users/:id").methods(["GET", "PUT"]));
//! reporter.record(RouteRecord::new("/health").method("GET").hide(true));
//!
//! // ...then exactly once, after startup completes:
//! reporter.ready();
//! ```
//!
//! Output:
//!
//! ```text
//! Available routes:
//!
//! ╔═══════════╤════════════╗
//! ║ Method(s) │ Path       ║
//! ╟───────────┼────────────╢
//! ║ GET | PUT │ /users/:id ║
//! ╚═══════════╧════════════╝
//! ```
//!
//! # Design
//!
//! The pipeline is three pieces composed in sequence:
//!
//! - [`reporter`] — accumulates [`RouteRecord`]s in announcement order and
//!   binds to the host lifecycle (`record` per route, `ready` once).
//! - [`normalize`] — pure pass producing the display order: filter hidden
//!   and rejected routes, sort by path, optionally merge same-path
//!   registrations (compact mode), order methods by display priority.
//! - [`render`] — draws the table through a swappable [`Styler`] strategy
//!   (ANSI or plain), so color support is decided once per pass.
//!
//! Everything is synchronous and single-threaded; the one render pass runs
//! at the readiness notification and writes at most once per lifecycle.
//!
//! Set `PRINT_ROUTES_DEBUG=1` to trace collection and rendering on stderr.

#![warn(unsafe_code)]

pub mod config;
pub mod debug;
pub mod normalize;
pub mod record;
pub mod render;
pub mod reporter;
pub mod style;
pub mod table;

pub use config::{ReporterConfig, RouteFilter};
pub use normalize::normalize;
pub use record::{Method, QueryParam, QuerySchema, RouteConfig, RouteRecord};
pub use render::render;
pub use reporter::RouteReporter;
pub use style::{AnsiStyler, Color, PlainStyler, Styler, Theme, ThemeParseError};
pub use table::{Alignment, Cell, Frame};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Method, QuerySchema, ReporterConfig, RouteRecord, RouteReporter, Theme,
    };
}
