//! Route list normalization.
//!
//! Turns the raw registration list into the final display order: hidden and
//! filtered-out records are dropped, the rest are sorted by path, optionally
//! merged per path (compact mode), and each record's methods are put into
//! the fixed display priority order.
//!
//! Pure function of its inputs; calling it twice on the same frozen list
//! yields the same output.

use crate::record::{Method, RouteRecord};

/// Normalize a registration list into display order.
///
/// Steps, in order:
///
/// 1. Drop every record whose `config.hide` is true or that the `visible`
///    predicate rejects.
/// 2. Sort by path, byte-lexicographic; equal paths keep insertion order.
/// 3. When `compact` is set, merge records sharing a path into one record
///    (see [`compact_routes`]).
/// 4. Order each record's methods by [`Method::sort_rank`].
pub fn normalize<F>(records: &[RouteRecord], compact: bool, visible: F) -> Vec<RouteRecord>
where
    F: Fn(&RouteRecord) -> bool,
{
    let mut routes: Vec<RouteRecord> = records
        .iter()
        .filter(|r| !r.config.hide && visible(r))
        .cloned()
        .collect();

    // Stable sort: same-path records keep their registration order.
    routes.sort_by(|a, b| a.path.cmp(&b.path));

    if compact {
        routes = compact_routes(routes);
    }

    for route in &mut routes {
        route.methods.sort_by_key(Method::sort_rank);
    }

    routes
}

/// Merge same-path records into single rows.
///
/// The input must already be sorted by path, so each group is a contiguous
/// run and the merged record lands in the first occurrence's slot. Methods
/// are unioned preserving first-seen order across the group. The
/// description survives only when every record in the group carries the
/// identical present value; absent counts as a distinct value, so any
/// disagreement drops it.
fn compact_routes(routes: Vec<RouteRecord>) -> Vec<RouteRecord> {
    let mut merged: Vec<RouteRecord> = Vec::with_capacity(routes.len());

    for route in routes {
        match merged.last_mut() {
            Some(prev) if prev.path == route.path => {
                for method in route.methods {
                    if !prev.methods.contains(&method) {
                        prev.methods.push(method);
                    }
                }
                if prev.config.description != route.config.description {
                    prev.config.description = None;
                }
            }
            _ => merged.push(route),
        }
    }

    merged
}
