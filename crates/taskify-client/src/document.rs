//! JSON:API envelopes served by the task service and their conversion into
//! the records in `taskify_core`.

use serde::{Deserialize, Deserializer};
use serde_json::{Value, json};
use std::collections::BTreeMap;

use taskify_core::*;

/// A collection response. Older endpoints name the row list `rows`; when a
/// payload carries both, `data` is used.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de> + Default"))]
pub struct Document<A> {
    #[serde(default = "Option::default")]
    pub data: Option<Vec<ResourceObject<A>>>,
    #[serde(default = "Option::default")]
    pub rows: Option<Vec<ResourceObject<A>>>,
    #[serde(default)]
    pub links: PaginationLinkSet,
    #[serde(default)]
    pub meta: Option<Value>,
}

/// A single-resource response. The service answers a missing id with a
/// `null` primary resource rather than a 404.
#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de> + Default"))]
pub struct SingleDocument<A> {
    #[serde(default = "Option::default")]
    pub data: Option<ResourceObject<A>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(bound(deserialize = "A: Deserialize<'de> + Default"))]
pub struct ResourceObject<A> {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub attributes: A,
    #[serde(default)]
    pub relationships: BTreeMap<String, Relationship>,
}

impl<A> ResourceObject<A> {
    /// Id of a to-one relationship, if linked.
    pub fn one(&self, name: &str) -> Option<String> {
        match self.relationships.get(name)?.data.as_ref()? {
            Linkage::One(ident) => Some(ident.id.clone()),
            Linkage::Many(idents) => idents.first().map(|i| i.id.clone()),
        }
    }

    /// Ids of a to-many relationship; empty when not linked.
    pub fn many(&self, name: &str) -> Vec<String> {
        match self.relationships.get(name).and_then(|r| r.data.as_ref()) {
            Some(Linkage::Many(idents)) => idents.iter().map(|i| i.id.clone()).collect(),
            Some(Linkage::One(ident)) => vec![ident.id.clone()],
            None => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Relationship {
    #[serde(default)]
    pub data: Option<Linkage>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Linkage {
    Many(Vec<ResourceIdentifier>),
    One(ResourceIdentifier),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceIdentifier {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Str(String),
        Int(i64),
    }

    Ok(match Repr::deserialize(deserializer)? {
        Repr::Str(s) => s,
        Repr::Int(n) => n.to_string(),
    })
}

// ─── Attributes ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskAttributes {
    pub title: Option<String>,
    pub scheduled: Option<String>,
    pub run: Option<String>,
    pub state: Option<String>,
    pub locks: Option<String>,
    pub options: Option<BTreeMap<String, Value>>,
    #[serde(rename = "scheduledBy", alias = "scheduled_by")]
    pub scheduled_by: Option<String>,
    pub depends: Option<Vec<Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskLogAttributes {
    #[serde(rename = "taskId", alias = "task_id")]
    pub task_id: Option<Value>,
    pub run: Option<String>,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamedStateAttributes {
    pub name: String,
    pub state: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ScriptAttributes {
    pub name: String,
    pub cmd: String,
    pub status: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub team_id: Option<Value>,
    pub default_options: Option<BTreeMap<String, Value>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TeamAttributes {
    pub name: String,
}

/// Dependencies arrive as nested objects, bare ids, or resource objects.
fn depend_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("id")
            .or_else(|| map.get("attributes").and_then(|a| a.get("id")))
            .and_then(depend_id),
        _ => None,
    }
}

fn value_id(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

// ─── Conversions ───────────────────────────────────────────────────

impl From<ResourceObject<TaskAttributes>> for Task {
    fn from(res: ResourceObject<TaskAttributes>) -> Self {
        let worker = res.one("worker").map(QueueId);
        let script = res.one("script").map(ScriptId);
        let parent = res.one("parent").map(TaskId);
        let children = res.many("children").into_iter().map(TaskId).collect();
        let logs = res.many("logs").into_iter().map(TaskLogId).collect();
        let attrs = res.attributes;
        Task {
            id: TaskId(res.id),
            title: attrs.title.unwrap_or_default(),
            scheduled: attrs.scheduled,
            run: attrs.run,
            state: attrs.state.unwrap_or_default(),
            locks: attrs.locks,
            options: attrs.options.unwrap_or_default(),
            scheduled_by: attrs.scheduled_by,
            worker,
            script,
            parent,
            children,
            depends: attrs
                .depends
                .unwrap_or_default()
                .iter()
                .filter_map(depend_id)
                .map(TaskId)
                .collect(),
            logs,
        }
    }
}

impl From<ResourceObject<TaskLogAttributes>> for TaskLog {
    fn from(res: ResourceObject<TaskLogAttributes>) -> Self {
        let worker = res.one("worker").map(WorkerId);
        let attrs = res.attributes;
        TaskLog {
            id: TaskLogId(res.id),
            task_id: attrs.task_id.as_ref().and_then(value_id).map(TaskId),
            run: attrs.run,
            state: attrs.state.unwrap_or_default(),
            worker,
        }
    }
}

impl From<ResourceObject<NamedStateAttributes>> for Worker {
    fn from(res: ResourceObject<NamedStateAttributes>) -> Self {
        Worker {
            id: WorkerId(res.id),
            name: res.attributes.name,
            state: res.attributes.state.unwrap_or_default(),
        }
    }
}

impl From<ResourceObject<NamedStateAttributes>> for WorkerQueue {
    fn from(res: ResourceObject<NamedStateAttributes>) -> Self {
        WorkerQueue {
            id: QueueId(res.id),
            name: res.attributes.name,
            state: res.attributes.state.unwrap_or_default(),
        }
    }
}

impl From<ResourceObject<ScriptAttributes>> for Script {
    fn from(res: ResourceObject<ScriptAttributes>) -> Self {
        let team = res
            .one("team")
            .or_else(|| res.attributes.team_id.as_ref().and_then(value_id))
            .map(TeamId);
        let attrs = res.attributes;
        Script {
            id: ScriptId(res.id),
            name: attrs.name,
            cmd: attrs.cmd,
            status: attrs.status.unwrap_or_else(|| "ACTIVE".to_string()),
            kind: attrs
                .kind
                .unwrap_or_else(|| taskify_core::draft::DEFAULT_SCRIPT_KIND.to_string()),
            team,
            default_options: attrs.default_options.unwrap_or_default(),
        }
    }
}

impl From<ResourceObject<TeamAttributes>> for Team {
    fn from(res: ResourceObject<TeamAttributes>) -> Self {
        Team {
            id: TeamId(res.id),
            name: res.attributes.name,
        }
    }
}

/// Converts every row of a collection document.
pub fn into_records<A, R>(doc: Document<A>) -> Vec<R>
where
    R: From<ResourceObject<A>>,
{
    doc.data
        .or(doc.rows)
        .unwrap_or_default()
        .into_iter()
        .map(R::from)
        .collect()
}

// ─── Non-resource payloads ─────────────────────────────────────────

/// Unwraps `{"data": {"attributes": {...}}}`, `{"data": {...}}` or a bare
/// object into the inner attribute map.
pub fn attribute_map(payload: Value) -> BTreeMap<String, Value> {
    let inner = match payload {
        Value::Object(mut outer) => match outer.remove("data") {
            Some(Value::Object(mut data)) => match data.remove("attributes") {
                Some(Value::Object(mut attrs)) => {
                    if let Some(id) = data.remove("id") {
                        attrs.entry("id").or_insert(id);
                    }
                    attrs
                }
                _ => data,
            },
            Some(_) => serde_json::Map::new(),
            None => outer,
        },
        _ => serde_json::Map::new(),
    };
    inner.into_iter().collect()
}

pub fn worker_options(worker: &WorkerId, payload: Value) -> WorkerOptions {
    let attrs = attribute_map(payload);
    let as_u32 = |key: &str| {
        attrs
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };
    WorkerOptions {
        worker: worker.clone(),
        concurrency: as_u32("concurrency"),
        prefetchcount: as_u32("prefetchcount"),
        statistics: match attrs.get("statistics") {
            Some(Value::Object(stats)) => stats.clone().into_iter().collect(),
            _ => BTreeMap::new(),
        },
    }
}

/// Builds a JSON:API request body for a create or update.
pub fn resource_body(kind: &str, id: Option<&str>, attributes: Value) -> Value {
    match id {
        Some(id) => json!({ "data": { "type": kind, "id": id, "attributes": attributes } }),
        None => json!({ "data": { "type": kind, "attributes": attributes } }),
    }
}
