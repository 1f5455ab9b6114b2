//! Reporter configuration.
//!
//! All knobs are optional with defaults matching the common case: colored
//! output, one row per registration (no compaction), query-string
//! templates shown, every route visible.

use std::fmt;
use std::sync::Arc;

use crossterm::tty::IsTty;

use crate::record::RouteRecord;
use crate::style::{AnsiStyler, PlainStyler, Styler, Theme};

/// Caller-supplied visibility predicate.
pub type RouteFilter = Arc<dyn Fn(&RouteRecord) -> bool + Send + Sync>;

/// Configuration for a [`RouteReporter`](crate::reporter::RouteReporter).
#[derive(Clone)]
pub struct ReporterConfig {
    /// Emit ANSI styling.
    pub use_colors: bool,
    /// Merge registrations sharing a path into one row.
    pub compact: bool,
    /// Append query-string templates to path cells.
    pub querystring: bool,
    /// Color palette used when `use_colors` is set.
    pub theme: Theme,
    filter: Option<RouteFilter>,
}

impl ReporterConfig {
    /// Create a config with defaults: colors on, compact off, query
    /// strings on, no filter.
    #[must_use]
    pub fn new() -> Self {
        Self {
            use_colors: true,
            compact: false,
            querystring: true,
            theme: Theme::default(),
            filter: None,
        }
    }

    /// Create a config with `use_colors` detected from the environment.
    ///
    /// Colors are disabled when stdout is not a terminal or when the
    /// `NO_COLOR` convention variable is set.
    #[must_use]
    pub fn detected() -> Self {
        let colors = std::io::stdout().is_tty() && std::env::var_os("NO_COLOR").is_none();
        Self::new().use_colors(colors)
    }

    /// Set whether ANSI styling is emitted.
    #[must_use]
    pub fn use_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Set compact mode.
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Set whether query-string templates are rendered.
    #[must_use]
    pub fn querystring(mut self, querystring: bool) -> Self {
        self.querystring = querystring;
        self
    }

    /// Set the color theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Install a visibility predicate; routes it rejects are not reported.
    #[must_use]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: Fn(&RouteRecord) -> bool + Send + Sync + 'static,
    {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Apply the visibility predicate (always-true when none installed).
    #[must_use]
    pub fn is_visible(&self, route: &RouteRecord) -> bool {
        self.filter.as_ref().is_none_or(|f| f(route))
    }

    /// Build the styling strategy for one render pass.
    #[must_use]
    pub fn styler(&self) -> Box<dyn Styler> {
        if self.use_colors {
            Box::new(AnsiStyler::new(self.theme.clone()))
        } else {
            Box::new(PlainStyler)
        }
    }
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ReporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReporterConfig")
            .field("use_colors", &self.use_colors)
            .field("compact", &self.compact)
            .field("querystring", &self.querystring)
            .field("theme", &self.theme)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
