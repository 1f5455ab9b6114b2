//! Route table rendering.
//!
//! Takes the normalized route list and produces the final report string:
//! the `Available routes:` banner, a blank line, and the bordered table.
//! An empty route list produces no output at all, not an empty table.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;

use crate::record::{QuerySchema, RouteRecord};
use crate::style::Styler;
use crate::table::{Alignment, Cell, Frame};

/// Path parameter segments: `:name` or `[:name]`.
static PARAM_SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":\w+|\[:\w+\]").expect("parameter segment pattern"));

/// Render the route table.
///
/// Returns `None` when `routes` is empty: callers must then write nothing
/// to the sink, not even the banner. The description column appears iff at
/// least one route carries a description key, even an empty one. Query
/// templates are appended to the path cell only when `show_query` is set.
#[must_use]
pub fn render(routes: &[RouteRecord], styler: &dyn Styler, show_query: bool) -> Option<String> {
    if routes.is_empty() {
        return None;
    }

    let has_description = routes.iter().any(RouteRecord::has_description);

    let mut header = vec![
        Cell::styled("Method(s)", styler.header("Method(s)")),
        Cell::styled("Path", styler.header("Path")),
    ];
    if has_description {
        header.push(Cell::styled("Description", styler.header("Description")));
    }

    let mut rows = Vec::with_capacity(routes.len());
    for route in routes {
        let methods_plain = route
            .methods
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" | ");
        let methods_painted = route
            .methods
            .iter()
            .map(|m| styler.method(m.as_str()))
            .collect::<Vec<_>>()
            .join(" | ");

        let mut path_plain = route.path.clone();
        if show_query {
            if let Some(schema) = &route.query {
                path_plain.push_str(&query_template(schema));
            }
        }
        let path_painted = paint_path(&path_plain, styler);

        let mut row = vec![
            Cell::styled(methods_plain, methods_painted),
            Cell::styled(path_plain, path_painted),
        ];
        if has_description {
            let description = route.config.description.clone().unwrap_or_default();
            let painted = styler.description(&description);
            row.push(Cell::styled(description, painted));
        }
        rows.push(row);
    }

    let table = Frame::double_outer().draw(
        &header,
        &rows,
        &[Alignment::Right, Alignment::Left, Alignment::Left],
    );

    Some(format!("Available routes:\n\n{table}"))
}

/// Paint a path label, highlighting parameter segments.
///
/// Literal fragments get the path style, `:name` and `[:name]` segments the
/// parameter style; the whole cell reads bold through the styler.
fn paint_path(label: &str, styler: &dyn Styler) -> String {
    let mut out = String::new();
    let mut last = 0;
    for segment in PARAM_SEGMENT.find_iter(label) {
        if segment.start() > last {
            out.push_str(&styler.path(&label[last..segment.start()]));
        }
        out.push_str(&styler.path_param(segment.as_str()));
        last = segment.end();
    }
    if last < label.len() {
        out.push_str(&styler.path(&label[last..]));
    }
    out
}

/// Render a query-string template for a schema.
///
/// Each parameter becomes `name=value` in declaration order, the first
/// prefixed with `?`, the rest with `&`; optional parameters are
/// parenthesized. A cosmetic rewrite pass then folds separators into
/// adjacent parentheses so consecutive optional fragments compose without
/// doubled delimiters. The replacement order is load-bearing.
fn query_template(schema: &QuerySchema) -> String {
    if schema.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    for (i, param) in schema.params.iter().enumerate() {
        out.push(if i == 0 { '?' } else { '&' });
        if param.required {
            let _ = write!(out, "{}=value", param.name);
        } else {
            let _ = write!(out, "({}=value)", param.name);
        }
    }

    out.replace("&(", "(&").replace(")&", "&)").replace(")(&", "&)(")
}
