use std::sync::Arc;
use taskify_client::{ClientError, TaskListQueryExecutor};
use taskify_core::*;

use crate::fakes::{FakeFeed, collection, links, task};

#[tokio::test]
async fn test_execute_returns_rows_and_meta() {
    let feed = Arc::new(FakeFeed::new());
    feed.respond(
        2,
        collection(vec![task("1", "FAILED"), task("2", "SUCCEED")], links(2, 20, 5)),
    );
    let executor = TaskListQueryExecutor::new(Arc::clone(&feed));

    let page = executor
        .execute(&QueryParameterSet::new().with_page(2))
        .await
        .unwrap();

    assert_eq!(page.rows.len(), 2);
    assert_eq!(page.meta.current(), Some(PageRef { page: 2, limit: 20 }));
    assert_eq!(page.meta.next().map(|p| p.page), Some(3));
    assert_eq!(page.meta.prev().map(|p| p.page), Some(1));
    assert_eq!(page.meta.get("last").map(|p| p.page), Some(5));
    assert!(page.has_next());
    assert!(page.has_prev());
}

#[tokio::test]
async fn test_next_pointing_at_current_page_is_dropped() {
    let feed = Arc::new(FakeFeed::new());
    feed.respond(3, collection(vec![task("9", "STARTED")], links(3, 20, 3)));
    let executor = TaskListQueryExecutor::new(Arc::clone(&feed));

    let page = executor
        .execute(&QueryParameterSet::new().with_page(3))
        .await
        .unwrap();

    assert!(!page.has_next());
    assert!(page.has_prev());
    assert!(page.meta.contains("last"));
}

#[tokio::test]
async fn test_single_page_has_no_neighbours() {
    let feed = Arc::new(FakeFeed::new());
    feed.respond(1, collection(vec![task("1", "PRERUN")], links(1, 20, 1)));
    let executor = TaskListQueryExecutor::new(Arc::clone(&feed));

    let page = executor.execute(&QueryParameterSet::new()).await.unwrap();
    assert!(!page.has_next());
    assert!(!page.has_prev());
}

#[tokio::test]
async fn test_missing_links_give_empty_meta() {
    let feed = Arc::new(FakeFeed::new());
    feed.respond(1, collection(vec![task("1", "PRERUN")], PaginationLinkSet::new()));
    let executor = TaskListQueryExecutor::new(Arc::clone(&feed));

    let page = executor.execute(&QueryParameterSet::new()).await.unwrap();
    assert_eq!(page.rows.len(), 1);
    assert!(page.meta.is_empty());
}

#[tokio::test]
async fn test_execute_sends_params_to_feed() {
    let feed = Arc::new(FakeFeed::new());
    let executor = TaskListQueryExecutor::new(Arc::clone(&feed));
    let params = QueryParameterSet::from_query("page=1&limit=5&state=FAILED&worker=3");

    executor.execute(&params).await.unwrap();

    assert_eq!(feed.requests(), vec![params]);
}

#[tokio::test]
async fn test_execute_propagates_failure() {
    let feed = Arc::new(FakeFeed::new());
    feed.fail(1, "service down");
    let executor = TaskListQueryExecutor::new(Arc::clone(&feed));

    let err = executor.execute(&QueryParameterSet::new()).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 503, .. }));
}
