pub mod document;
pub mod error;
pub mod executor;
pub mod feed;
pub mod http;
pub mod menu;
pub mod view;

pub use error::ClientError;
pub use executor::{TaskListQueryExecutor, TaskPage};
pub use feed::{TaskCollection, TaskFeed};
pub use http::HttpApi;
pub use menu::{Activation, AggregateCountPoller, MenuEntry, menu_entries};
pub use view::{RefreshOutcome, TaskListState, TaskListView};
