use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

pub const LINK_SELF: &str = "self";
pub const LINK_NEXT: &str = "next";
pub const LINK_PREV: &str = "prev";
pub const LINK_FIRST: &str = "first";
pub const LINK_LAST: &str = "last";

/// Named pagination links as delivered by the service. A link may be missing
/// or explicitly `null`; both mean "not available". A link that is not a
/// string is kept as unavailable so the rest of the response still decodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PaginationLinkSet(BTreeMap<String, Option<String>>);

impl<'de> Deserialize<'de> for PaginationLinkSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
        let links = raw
            .unwrap_or_default()
            .into_iter()
            .map(|(name, value)| {
                let url = match value {
                    Value::String(url) => Some(url),
                    Value::Null => None,
                    other => {
                        debug!(link = %name, value = %other, "Pagination link is not a URL string");
                        crate::metrics::record_link_parse_failure(&name);
                        None
                    }
                };
                (name, url)
            })
            .collect();
        Ok(Self(links))
    }
}

impl PaginationLinkSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, url: impl Into<String>) -> Self {
        self.0.insert(name.to_string(), Some(url.into()));
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).and_then(|u| u.as_deref())
    }

    /// Present (non-null) links in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(name, url)| url.as_deref().map(|u| (name.as_str(), u)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageRef {
    pub page: u64,
    pub limit: u64,
}

/// Per-link page coordinates. A name is present only when its link carried a
/// parseable `page` and `limit`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaginationMeta(BTreeMap<String, PageRef>);

impl PaginationMeta {
    pub fn get(&self, name: &str) -> Option<PageRef> {
        self.0.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn insert(&mut self, name: &str, page: PageRef) {
        self.0.insert(name.to_string(), page);
    }

    pub fn remove(&mut self, name: &str) -> Option<PageRef> {
        self.0.remove(name)
    }

    pub fn current(&self) -> Option<PageRef> {
        self.get(LINK_SELF)
    }

    pub fn next(&self) -> Option<PageRef> {
        self.get(LINK_NEXT)
    }

    pub fn prev(&self) -> Option<PageRef> {
        self.get(LINK_PREV)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Extracts `{page, limit}` for every link that carries both.
pub fn parse(links: &PaginationLinkSet) -> PaginationMeta {
    let mut meta = PaginationMeta::default();
    for (name, url) in links.iter() {
        match parse_link(url) {
            Some(page) => meta.insert(name, page),
            None => {
                debug!(link = name, url, "Pagination link without usable page/limit");
                crate::metrics::record_link_parse_failure(name);
            }
        }
    }
    meta
}

/// Reads `page` and `limit` from the query portion of a link URL. The last
/// occurrence of a key wins.
pub fn parse_link(url: &str) -> Option<PageRef> {
    let (_, rest) = url.split_once('?')?;
    let query = rest.split('#').next().unwrap_or_default();

    let mut page = None;
    let mut limit = None;
    for pair in query.split('&') {
        let Some((key, value)) = pair.split_once('=') else {
            continue;
        };
        match key {
            "page" => page = value.parse::<u64>().ok(),
            "limit" => limit = value.parse::<u64>().ok(),
            _ => {}
        }
    }

    Some(PageRef {
        page: page?,
        limit: limit?,
    })
}
