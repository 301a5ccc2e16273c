use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tokio::sync::watch;
use tracing::debug;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 20;

/// Whitelisted task-list parameters, in URL order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKey {
    Page,
    Limit,
    Size,
    Sort,
    State,
    Filter,
    Script,
    Worker,
    Team,
}

impl ParamKey {
    pub const ALL: [ParamKey; 9] = [
        Self::Page,
        Self::Limit,
        Self::Size,
        Self::Sort,
        Self::State,
        Self::Filter,
        Self::Script,
        Self::Worker,
        Self::Team,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Page => "page",
            Self::Limit => "limit",
            Self::Size => "size",
            Self::Sort => "sort",
            Self::State => "state",
            Self::Filter => "filter",
            Self::Script => "script",
            Self::Worker => "worker",
            Self::Team => "team",
        }
    }

    pub fn from_str_key(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }

    fn is_positive_int(&self) -> bool {
        matches!(self, Self::Page | Self::Limit)
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParamValue {
    Int(i64),
    Str(String),
}

impl ParamValue {
    fn as_positive(&self) -> Option<u64> {
        match self {
            Self::Int(n) if *n > 0 => Some(*n as u64),
            Self::Int(_) => None,
            Self::Str(s) => s.trim().parse::<u64>().ok().filter(|n| *n > 0),
        }
    }

    fn is_empty(&self) -> bool {
        matches!(self, Self::Str(s) if s.is_empty())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for ParamValue {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<u64> for ParamValue {
    fn from(n: u64) -> Self {
        Self::Int(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

/// What the task list currently shows. `page` and `limit` are always present
/// and positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParameterSet(BTreeMap<ParamKey, ParamValue>);

impl Default for QueryParameterSet {
    fn default() -> Self {
        let mut params = BTreeMap::new();
        params.insert(ParamKey::Page, ParamValue::from(DEFAULT_PAGE));
        params.insert(ParamKey::Limit, ParamValue::from(DEFAULT_LIMIT));
        Self(params)
    }
}

impl QueryParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from a navigable URL query string (leading `?` optional).
    pub fn from_query(query: &str) -> Self {
        let pairs = url::form_urlencoded::parse(query.trim_start_matches('?').as_bytes())
            .map(|(k, v)| (k.into_owned(), ParamValue::Str(v.into_owned())));
        let mut set = Self::default();
        set.merge(pairs);
        set
    }

    /// Serializes to a URL query string. `page` and `limit` are always emitted.
    pub fn to_query(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.0 {
            serializer.append_pair(key.as_str(), &value.to_string());
        }
        serializer.finish()
    }

    pub fn get(&self, key: ParamKey) -> Option<&ParamValue> {
        self.0.get(&key)
    }

    pub fn page(&self) -> u64 {
        self.get(ParamKey::Page)
            .and_then(ParamValue::as_positive)
            .unwrap_or(DEFAULT_PAGE)
    }

    pub fn limit(&self) -> u64 {
        self.get(ParamKey::Limit)
            .and_then(ParamValue::as_positive)
            .unwrap_or(DEFAULT_LIMIT)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ParamKey, &ParamValue)> {
        self.0.iter().map(|(k, v)| (*k, v))
    }

    /// `(name, value)` pairs ready for an HTTP query.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.0
            .iter()
            .map(|(k, v)| (k.as_str(), v.to_string()))
            .collect()
    }

    pub fn with_page(&self, page: u64) -> Self {
        let mut next = self.clone();
        next.merge([(ParamKey::Page.as_str(), ParamValue::from(page))]);
        next
    }

    pub fn with_limit(&self, limit: u64) -> Self {
        let mut next = self.clone();
        next.merge([(ParamKey::Limit.as_str(), ParamValue::from(limit))]);
        next
    }

    fn merge<I, K>(&mut self, partial: I)
    where
        I: IntoIterator<Item = (K, ParamValue)>,
        K: AsRef<str>,
    {
        for (name, value) in partial {
            let name = name.as_ref();
            let Some(key) = ParamKey::from_str_key(name) else {
                debug!(param = name, "Dropping unrecognized query parameter");
                crate::metrics::record_ignored_param(name);
                continue;
            };

            if key.is_positive_int() {
                match value.as_positive() {
                    Some(n) => {
                        self.0.insert(key, ParamValue::from(n));
                    }
                    None => {
                        debug!(param = name, value = %value, "Rejecting non-positive value, keeping previous");
                    }
                }
            } else if value.is_empty() {
                self.0.remove(&key);
            } else {
                // Filter values are stored as text.
                self.0.insert(key, ParamValue::Str(value.to_string()));
            }
        }
    }
}

/// Owner of the task-list parameters. Every mutation goes through `update`,
/// and subscribers are told when a re-fetch is due.
#[derive(Debug)]
pub struct QueryParameterStore {
    tx: watch::Sender<QueryParameterSet>,
}

impl Default for QueryParameterStore {
    fn default() -> Self {
        Self::new(QueryParameterSet::default())
    }
}

impl QueryParameterStore {
    pub fn new(initial: QueryParameterSet) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn from_query(query: &str) -> Self {
        Self::new(QueryParameterSet::from_query(query))
    }

    pub fn current(&self) -> QueryParameterSet {
        self.tx.borrow().clone()
    }

    /// Merges `partial` into the current set and notifies subscribers.
    /// Invalid `page`/`limit` values leave the previous value in place.
    pub fn update<I, K, V>(&self, partial: I) -> QueryParameterSet
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<ParamValue>,
    {
        let mut updated = None;
        self.tx.send_modify(|set| {
            set.merge(partial.into_iter().map(|(k, v)| (k, v.into())));
            updated = Some(set.clone());
        });
        updated.unwrap_or_else(|| self.current())
    }

    /// Replaces the whole set, as when the navigable URL changes.
    pub fn replace(&self, params: QueryParameterSet) -> QueryParameterSet {
        self.tx.send_replace(params.clone());
        params
    }

    /// Re-announces the current set so subscribers fetch again.
    pub fn touch(&self) {
        self.tx.send_modify(|_| {});
    }

    pub fn subscribe(&self) -> watch::Receiver<QueryParameterSet> {
        self.tx.subscribe()
    }
}
