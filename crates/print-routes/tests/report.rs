//! End-to-end reporter tests: record routes the way a host server would,
//! signal readiness, and assert on the bytes written to the sink.

use print_routes::prelude::*;

fn plain() -> ReporterConfig {
    ReporterConfig::new().use_colors(false)
}

fn report(reporter: &RouteReporter) -> String {
    let mut sink = Vec::new();
    reporter.ready_with(&mut sink).unwrap();
    String::from_utf8(sink).unwrap()
}

#[test]
fn lists_unhidden_routes() {
    let reporter = RouteReporter::new(plain());
    reporter.record(RouteRecord::new("/abc").method("GET"));
    reporter.record(RouteRecord::new("/abc").method("OPTIONS"));
    reporter.record(
        RouteRecord::new("/x/:id")
            .methods(["POST", "GET"])
            .description("Title"),
    );
    reporter.record(RouteRecord::new("/y").methods(["GET", "POST"]).hide(true));

    let expected = concat!(
        "Available routes:\n",
        "\n",
        "╔════════════╤════════╤═════════════╗\n",
        "║  Method(s) │ Path   │ Description ║\n",
        "╟────────────┼────────┼─────────────╢\n",
        "║        GET │ /abc   │             ║\n",
        "║    OPTIONS │ /abc   │             ║\n",
        "║ GET | POST │ /x/:id │ Title       ║\n",
        "╚════════════╧════════╧═════════════╝\n",
    );
    assert_eq!(report(&reporter), expected);
}

#[test]
fn omits_description_column_when_not_needed() {
    let reporter = RouteReporter::new(plain());
    reporter.record(RouteRecord::new("/abc").method("GET"));
    reporter.record(RouteRecord::new("/abc").method("OPTIONS"));
    reporter.record(RouteRecord::new("/x/:id").methods(["POST", "GET"]));

    let expected = concat!(
        "Available routes:\n",
        "\n",
        "╔════════════╤════════╗\n",
        "║  Method(s) │ Path   ║\n",
        "╟────────────┼────────╢\n",
        "║        GET │ /abc   ║\n",
        "║    OPTIONS │ /abc   ║\n",
        "║ GET | POST │ /x/:id ║\n",
        "╚════════════╧════════╝\n",
    );
    assert_eq!(report(&reporter), expected);
}

#[test]
fn compact_merges_same_path_and_drops_conflicting_description() {
    let reporter = RouteReporter::new(plain().compact(true));
    reporter.record(RouteRecord::new("/abc").method("GET").description("A"));
    reporter.record(RouteRecord::new("/abc").method("OPTIONS"));

    // Descriptions conflict ("A" vs absent), so the merged row has none and
    // the column disappears with it.
    let expected = concat!(
        "Available routes:\n",
        "\n",
        "╔═══════════════╤══════╗\n",
        "║     Method(s) │ Path ║\n",
        "╟───────────────┼──────╢\n",
        "║ GET | OPTIONS │ /abc ║\n",
        "╚═══════════════╧══════╝\n",
    );
    assert_eq!(report(&reporter), expected);
}

#[test]
fn without_compact_same_path_stays_separate() {
    let reporter = RouteReporter::new(plain());
    reporter.record(RouteRecord::new("/abc").method("GET"));
    reporter.record(RouteRecord::new("/abc").method("OPTIONS"));

    let output = report(&reporter);
    let rows = output.lines().filter(|l| l.starts_with('║')).count();
    // Header plus one row per registration.
    assert_eq!(rows, 3);
}

#[test]
fn renders_query_string_template() {
    let reporter = RouteReporter::new(plain());
    reporter.record(
        RouteRecord::new("/first")
            .method("GET")
            .query(QuerySchema::new().required("foo").optional("bar")),
    );

    let output = report(&reporter);
    assert!(output.contains("║       GET │ /first?foo=value(&bar=value) ║"));
}

#[test]
fn querystring_flag_disables_templates() {
    let config = plain().querystring(false);
    let reporter = RouteReporter::new(config);
    reporter.record(
        RouteRecord::new("/first")
            .method("GET")
            .query(QuerySchema::new().required("foo")),
    );

    let output = report(&reporter);
    assert!(!output.contains("foo=value"));
    assert!(output.contains("/first"));
}

#[test]
fn prints_nothing_when_no_routes() {
    let reporter = RouteReporter::new(plain());
    let mut sink = Vec::new();
    reporter.ready_with(&mut sink).unwrap();
    assert_eq!(sink.len(), 0);
}

#[test]
fn prints_nothing_when_everything_hidden_or_filtered() {
    let config = plain().filter(|r| !r.path.starts_with("/skip"));
    let reporter = RouteReporter::new(config);
    reporter.record(RouteRecord::new("/secret").method("GET").hide(true));
    reporter.record(RouteRecord::new("/skip/me").method("GET"));

    let mut sink = Vec::new();
    reporter.ready_with(&mut sink).unwrap();
    assert_eq!(sink.len(), 0);
}

#[test]
fn empty_description_still_turns_column_on() {
    let reporter = RouteReporter::new(plain());
    reporter.record(RouteRecord::new("/abc").method("GET").description(""));

    let output = report(&reporter);
    assert!(output.contains("Description"));
}

#[test]
fn colored_report_contains_ansi() {
    let reporter = RouteReporter::new(ReporterConfig::new().use_colors(true));
    reporter.record(RouteRecord::new("/x/:id").method("GET"));

    let output = report(&reporter);
    assert!(output.contains('\x1b'));
    assert!(output.starts_with("Available routes:\n\n"));
}

#[test]
fn repeated_ready_writes_once() {
    let reporter = RouteReporter::new(plain());
    reporter.record(RouteRecord::new("/abc").method("GET"));

    let mut first = Vec::new();
    let mut second = Vec::new();
    reporter.ready_with(&mut first).unwrap();
    reporter.ready_with(&mut second).unwrap();
    assert!(!first.is_empty());
    assert!(second.is_empty());
}

#[test]
fn report_is_idempotent_over_a_frozen_list() {
    let records = vec![
        RouteRecord::new("/b").method("POST"),
        RouteRecord::new("/a").methods(["OPTIONS", "GET"]),
    ];

    let run = || {
        let reporter = RouteReporter::new(plain());
        for record in &records {
            reporter.record(record.clone());
        }
        report(&reporter)
    };
    assert_eq!(run(), run());
}
