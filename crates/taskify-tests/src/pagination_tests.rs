use taskify_core::pagination::{self, parse_link};
use taskify_core::*;

#[test]
fn test_parse_link_reads_page_and_limit() {
    let page = parse_link("http://svc/tasks?page=3&limit=20&state=ALL").unwrap();
    assert_eq!(page, PageRef { page: 3, limit: 20 });
}

#[test]
fn test_parse_link_ignores_order_and_fragment() {
    let page = parse_link("/tasks?state=FAILED&limit=50&page=2#top").unwrap();
    assert_eq!(page, PageRef { page: 2, limit: 50 });
}

#[test]
fn test_parse_link_last_occurrence_wins() {
    let page = parse_link("/tasks?page=1&limit=10&page=4").unwrap();
    assert_eq!(page.page, 4);
}

#[test]
fn test_parse_link_rejects_incomplete_urls() {
    assert!(parse_link("/tasks").is_none());
    assert!(parse_link("/tasks?page=2").is_none());
    assert!(parse_link("/tasks?limit=20").is_none());
    assert!(parse_link("/tasks?page=two&limit=20").is_none());
    assert!(parse_link("/tasks?page&limit=20").is_none());
}

#[test]
fn test_parse_builds_meta_for_present_links_only() {
    let links = PaginationLinkSet::new()
        .with("self", "http://svc/tasks?page=2&limit=20")
        .with("next", "http://svc/tasks?page=3&limit=20")
        .with("prev", "http://svc/tasks?page=1&limit=20")
        .with("last", "http://svc/tasks?state=ALL");

    let meta = pagination::parse(&links);
    assert_eq!(meta.len(), 3);
    assert_eq!(meta.current(), Some(PageRef { page: 2, limit: 20 }));
    assert_eq!(meta.next().map(|p| p.page), Some(3));
    assert_eq!(meta.prev().map(|p| p.page), Some(1));
    assert!(!meta.contains("last"));
}

#[test]
fn test_null_links_are_absent() {
    let links: PaginationLinkSet = serde_json::from_value(serde_json::json!({
        "self": "/tasks?page=1&limit=20",
        "next": null,
    }))
    .unwrap();

    assert!(links.get("next").is_none());
    let meta = pagination::parse(&links);
    assert!(meta.next().is_none());
    assert_eq!(meta.names().collect::<Vec<_>>(), vec!["self"]);
}

#[test]
fn test_empty_link_set() {
    let links = PaginationLinkSet::new();
    assert!(links.is_empty());
    assert!(pagination::parse(&links).is_empty());
}

#[test]
fn test_parse_is_idempotent() {
    let links = PaginationLinkSet::new()
        .with("self", "http://svc/tasks?page=2&limit=20&state=ALL")
        .with("first", "http://svc/tasks?page=1&limit=20&state=ALL")
        .with("last", "http://svc/tasks?page=7&limit=20&state=ALL")
        .with("next", "http://svc/tasks?page=3&limit=20&state=ALL")
        .with("prev", "http://svc/tasks?state=ALL");

    let first = pagination::parse(&links);
    let second = pagination::parse(&links);
    assert_eq!(first, second);

    let round_trip: PaginationMeta =
        serde_json::from_value(serde_json::to_value(&first).unwrap()).unwrap();
    assert_eq!(round_trip, first);
    assert_eq!(pagination::parse(&links), round_trip);
}

// ─── Non-string links ──────────────────────────────────────────────

#[test]
fn test_non_string_links_are_unavailable() {
    let links: PaginationLinkSet = serde_json::from_value(serde_json::json!({
        "self": "/tasks?page=1&limit=20",
        "next": { "href": "/tasks?page=2&limit=20" },
        "last": 5,
        "prev": null,
    }))
    .unwrap();

    assert_eq!(links.get("self"), Some("/tasks?page=1&limit=20"));
    assert!(links.get("next").is_none());
    assert!(links.get("last").is_none());

    let meta = pagination::parse(&links);
    assert_eq!(meta.names().collect::<Vec<_>>(), vec!["self"]);
}

#[test]
fn test_null_link_map_is_empty() {
    let links: PaginationLinkSet = serde_json::from_value(serde_json::Value::Null).unwrap();
    assert!(links.is_empty());
}
