use dom_recon::browser::extractor::{load_snapshot, parse_snapshot};
use dom_recon::recon::assembler::{describe, discover, discover_traced};
use dom_recon::recon::recon_model::{DiscoveryReport, SemanticType, TypeCounts};
use dom_recon::snapshot::snapshot_model::{DomNode, DomSnapshot, NodeId};
use dom_recon::trace::logger::TraceLogger;
use dom_recon::{DomView, ReconError};

mod common;
use crate::common::builders::{element, login_page, report, scanned_at, single, visible};

const URL: &str = "https://www.example.com/login";

fn fixture_path() -> String {
    format!(
        "{}/tests/fixtures/checkout_snapshot.json",
        env!("CARGO_MANIFEST_DIR")
    )
}

fn assert_counts_invariant(report: &DiscoveryReport) {
    for t in SemanticType::ALL {
        assert!(report.counts.contains(t), "missing count for {}", t);
    }
    assert_eq!(report.counts.total(), report.elements.len());
}

// ============================================================================
// Assembly over the login page
// ============================================================================

#[test]
fn login_page_discovers_candidates_in_document_order() {
    let report = discover(&login_page(), URL, scanned_at());

    let tags: Vec<&str> = report.elements.iter().map(|e| e.tag_name.as_str()).collect();
    assert_eq!(tags, vec!["input", "input", "input", "a", "div"]);

    let types: Vec<SemanticType> = report.elements.iter().map(|e| e.semantic_type).collect();
    assert_eq!(
        types,
        vec![
            SemanticType::Input,
            SemanticType::Input,
            SemanticType::Button,
            SemanticType::Link,
            SemanticType::Button,
        ]
    );

    assert_eq!(report.url, URL);
    assert_eq!(report.scanned_at, scanned_at());
    assert_counts_invariant(&report);
}

#[test]
fn counts_are_zero_filled() {
    let report = discover(&login_page(), URL, scanned_at());
    assert_eq!(report.counts.get(SemanticType::Button), 2);
    assert_eq!(report.counts.get(SemanticType::Link), 1);
    assert_eq!(report.counts.get(SemanticType::Input), 2);
    assert_eq!(report.counts.get(SemanticType::Select), 0);
    assert_eq!(report.counts.get(SemanticType::Textarea), 0);
    assert_eq!(report.counts.get(SemanticType::Other), 0);
}

#[test]
fn labelled_input_record() {
    let report = discover(&login_page(), URL, scanned_at());
    let email = &report.elements[0];

    assert_eq!(email.id.as_deref(), Some("email"));
    assert_eq!(email.name.as_deref(), Some("email"));
    assert_eq!(email.input_type.as_deref(), Some("email"));
    assert_eq!(email.placeholder.as_deref(), Some("you@example.com"));
    assert_eq!(email.label_text.as_deref(), Some("Email address"));
    assert_eq!(email.accessible_name.as_deref(), Some("Email address"));
    assert_eq!(email.css.as_deref(), Some("#email"));
    assert_eq!(email.xpath.as_deref(), Some("//*[@id=\"email\"]"));
    assert_eq!(email.href, None);
    assert_eq!(email.test_id, None);
}

#[test]
fn password_value_is_never_captured() {
    let report = discover(&login_page(), URL, scanned_at());
    let password = &report.elements[1];
    assert_eq!(password.input_type.as_deref(), Some("password"));
    assert_eq!(password.value, None);
    assert_eq!(password.label_text.as_deref(), Some("Password"));
}

#[test]
fn submit_input_record() {
    let report = discover(&login_page(), URL, scanned_at());
    let submit = &report.elements[2];

    assert_eq!(submit.semantic_type, SemanticType::Button);
    assert_eq!(submit.test_id.as_deref(), Some("login-submit"));
    assert_eq!(submit.accessible_name.as_deref(), Some("Sign in"));
    assert_eq!(submit.value.as_deref(), Some("Sign in"));
    assert!(submit.css.as_deref().unwrap().starts_with("[data-testid=\"login-submit\"]"));
}

#[test]
fn link_and_role_button_records() {
    let report = discover(&login_page(), URL, scanned_at());

    let link = &report.elements[3];
    assert_eq!(link.href.as_deref(), Some("/forgot"));
    assert_eq!(link.text.as_deref(), Some("Forgot password?"));
    assert_eq!(link.xpath.as_deref(), Some("/html[1]/body[1]/a[1]"));

    let menu = &report.elements[4];
    assert_eq!(menu.role.as_deref(), Some("button"));
    assert_eq!(menu.accessible_name.as_deref(), Some("Menu"));
    assert_eq!(menu.css.as_deref(), Some("div"));
}

#[test]
fn plain_div_never_reaches_the_report() {
    let report = discover(&login_page(), URL, scanned_at());
    assert!(
        report
            .elements
            .iter()
            .all(|e| e.text.as_deref() != Some("Banner"))
    );
    assert!(
        report
            .elements
            .iter()
            .all(|e| e.text.as_deref() != Some("Edit me"))
    );
}

#[test]
fn disabled_flags_are_recorded() {
    let snap = single(
        visible("button")
            .with_disabled(true)
            .with_attr("aria-disabled", "true")
            .with_text("Wait"),
    );
    let el = describe(&snap, NodeId(2));
    assert!(el.disabled);
    assert!(el.aria_disabled);
}

#[test]
fn href_kept_only_for_links() {
    let snap = single(
        visible("a")
            .with_attr("href", "/x")
            .with_attr("role", "button"),
    );
    let el = describe(&snap, NodeId(2));
    assert_eq!(el.semantic_type, SemanticType::Button);
    assert_eq!(el.href, None);
}

#[test]
fn empty_snapshot_yields_empty_zero_filled_report() {
    let snap = DomSnapshot::from_nodes(None, None, vec![]).unwrap();
    let report = discover(&snap, URL, scanned_at());
    assert!(report.elements.is_empty());
    assert_counts_invariant(&report);
}

// ============================================================================
// Report serialization and validation
// ============================================================================

#[test]
fn report_json_has_all_six_count_keys() {
    let report = discover(&login_page(), URL, scanned_at());
    let json = serde_json::to_value(&report).unwrap();

    let counts = json["counts"].as_object().unwrap();
    for key in ["button", "link", "input", "select", "textarea", "other"] {
        assert!(counts.contains_key(key), "missing {}", key);
    }
    assert_eq!(json["scannedAt"], "2026-03-14T09:30:00Z");
    assert_eq!(json["elements"][0]["type"], "input");
    assert_eq!(json["elements"][0]["labelText"], "Email address");
    assert!(json["elements"][0].get("href").is_none());
}

#[test]
fn report_survives_json_and_validates() {
    let report = discover(&login_page(), URL, scanned_at());
    let json = serde_json::to_string(&report).unwrap();
    let back: DiscoveryReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
    assert!(back.validate().is_ok());
}

#[test]
fn validate_rejects_mismatched_counts() {
    let mut bad = report(URL, vec![element(SemanticType::Button, "button")]);
    bad.counts = TypeCounts::zeroed();
    match bad.validate() {
        Err(ReconError::CountMismatch { expected, actual }) => {
            assert_eq!(expected, 1);
            assert_eq!(actual, 0);
        }
        other => panic!("expected CountMismatch, got {:?}", other),
    }
}

#[test]
fn validate_rejects_missing_count_key() {
    let json = r#"{
        "url": "https://example.com",
        "scannedAt": "2026-03-14T09:30:00Z",
        "counts": { "button": 0, "link": 0, "input": 0, "select": 0, "textarea": 0 },
        "elements": []
    }"#;
    let report: DiscoveryReport = serde_json::from_str(json).unwrap();
    assert!(matches!(report.validate(), Err(ReconError::MissingCount(t)) if t == "other"));
}

// ============================================================================
// Decision trace
// ============================================================================

#[test]
fn trace_records_every_node() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trace.jsonl");
    let tracer = TraceLogger::new(path.to_str().unwrap());
    assert!(tracer.is_enabled());

    let snap = login_page();
    let report = discover_traced(&snap, URL, scanned_at(), &tracer);
    drop(tracer);

    let content = std::fs::read_to_string(&path).unwrap();
    let events: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(events.len(), snap.len());
    let candidates = events.iter().filter(|e| e["decision"] == "candidate").count();
    assert_eq!(candidates, report.elements.len());

    assert_eq!(events[9]["decision"], "rejected");
    assert_eq!(events[9]["reason"], "not-interactive");
    assert_eq!(events[12]["reason"], "hidden:display");
    assert_eq!(events[13]["reason"], "bare-container");
    assert_eq!(events[4]["decision"], "candidate");
    assert!(events[4].get("reason").is_none());
}

#[test]
fn unwritable_trace_path_disables_tracing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("trace.jsonl");
    let tracer = TraceLogger::new(path.to_str().unwrap());
    assert!(!tracer.is_enabled());

    let report = discover_traced(&login_page(), URL, scanned_at(), &tracer);
    assert_eq!(report.elements.len(), 5);
}

// ============================================================================
// Snapshot wire format
// ============================================================================

#[test]
fn fixture_snapshot_loads_and_scans() {
    let snap = load_snapshot(&fixture_path()).unwrap();
    assert_eq!(snap.len(), 10);
    assert_eq!(snap.title.as_deref(), Some("Checkout"));
    assert_eq!(snap.tag_name(NodeId(5)), "button", "tags are lowercased");

    let url = snap.url.clone().unwrap();
    let report = discover(&snap, &url, scanned_at());
    assert_counts_invariant(&report);
    for t in SemanticType::ALL {
        assert_eq!(report.counts.get(t), 1, "one {} expected", t);
    }

    let select = &report.elements[0];
    assert_eq!(select.semantic_type, SemanticType::Select);
    assert_eq!(select.accessible_name.as_deref(), Some("Country"));
    assert_eq!(select.value.as_deref(), Some("NZ"));

    let pay = &report.elements[2];
    assert_eq!(pay.test_id.as_deref(), Some("pay"));
    assert!(pay.aria_disabled);
    assert!(!pay.disabled);

    let checkbox = &report.elements[5];
    assert_eq!(checkbox.semantic_type, SemanticType::Input);
    assert_eq!(checkbox.input_type.as_deref(), Some("checkbox"));
}

#[test]
fn parent_must_precede_child() {
    let err = DomSnapshot::from_nodes(
        None,
        None,
        vec![DomNode::element("body").with_parent(1), DomNode::element("html")],
    )
    .unwrap_err();
    assert!(matches!(err, ReconError::InvalidSnapshot(_)));

    let self_parent = parse_snapshot(r#"{"nodes":[{"tag":"html","parent":0}]}"#, "inline");
    assert!(matches!(self_parent, Err(ReconError::Json { .. })));
}

#[test]
fn missing_snapshot_file_is_io_error() {
    let err = load_snapshot("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, ReconError::Io { .. }));
}
