//! Route collection and lifecycle binding.
//!
//! [`RouteReporter`] is the piece the host server talks to: one
//! [`record`](RouteReporter::record) call per route registration during
//! startup, then a single [`ready`](RouteReporter::ready) call once
//! initialization completes. The reporter runs exactly one
//! normalize-and-render pass at that point and writes the table to the
//! sink, only if at least one visible route exists.
//!
//! If host initialization fails, the host simply never calls `ready` and
//! nothing is written.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::config::ReporterConfig;
use crate::debug_log;
use crate::normalize::normalize;
use crate::record::RouteRecord;
use crate::render::render;

/// Collects route registrations and prints the route table at readiness.
#[derive(Debug)]
pub struct RouteReporter {
    config: ReporterConfig,
    routes: Mutex<Vec<RouteRecord>>,
    reported: AtomicBool,
}

impl RouteReporter {
    /// Create a reporter with the given configuration.
    #[must_use]
    pub fn new(config: ReporterConfig) -> Self {
        Self {
            config,
            routes: Mutex::new(Vec::new()),
            reported: AtomicBool::new(false),
        }
    }

    /// Record one route registration.
    ///
    /// Pure accumulation: no validation, callable any number of times, in
    /// any order, before the readiness notification.
    pub fn record(&self, route: RouteRecord) {
        debug_log!("recorded route {} ({} methods)", route.path, route.methods.len());
        self.routes.lock().push(route);
    }

    /// Readiness notification: render the table once and write it to
    /// stdout.
    ///
    /// A failed stdout write is logged through the debug facility and
    /// otherwise swallowed; the report is best-effort decoration and must
    /// not take the host down.
    pub fn ready(&self) {
        if let Err(err) = self.ready_with(&mut io::stdout()) {
            debug_log!("route report write failed: {err}");
        }
    }

    /// Readiness notification against an injected sink.
    ///
    /// At most one write ever happens per reporter, even if a misbehaving
    /// host signals readiness twice; later calls are no-ops.
    pub fn ready_with<W: Write>(&self, sink: &mut W) -> io::Result<()> {
        if self.reported.swap(true, Ordering::SeqCst) {
            debug_log!("readiness signalled twice, ignoring");
            return Ok(());
        }

        let routes = self.visible_routes();
        debug_log!("render pass over {} visible route(s)", routes.len());
        if let Some(report) = render(&routes, self.config.styler().as_ref(), self.config.querystring)
        {
            sink.write_all(report.as_bytes())?;
        }
        Ok(())
    }

    /// The normalized route list, for introspection by other components.
    ///
    /// Reflects the same filtering, ordering and compaction the rendered
    /// table uses.
    #[must_use]
    pub fn routes(&self) -> Vec<RouteRecord> {
        self.visible_routes()
    }

    fn visible_routes(&self) -> Vec<RouteRecord> {
        let routes = self.routes.lock();
        normalize(&routes, self.config.compact, |r| self.config.is_visible(r))
    }
}

impl Default for RouteReporter {
    fn default() -> Self {
        Self::new(ReporterConfig::new())
    }
}
