use crate::domain::model::TaskState;
use chrono::{DateTime, SecondsFormat, Utc};

/// Page size the server uses when `limit` is not sent.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;
/// Larger `limit` values are silently capped by the server.
pub const MAX_PAGE_LIMIT: u32 = 100;

/// Ordered query string pairs. Keys may repeat (`state=a&state=b`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    pub fn push_opt<T: ToString>(&mut self, key: &str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn push_datetime(&mut self, key: &str, value: Option<&DateTime<Utc>>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, format_datetime(value));
        }
        self
    }

    /// `csv` collection format: one parameter, values joined by commas.
    pub fn push_csv<S: AsRef<str>>(&mut self, key: &str, values: &[S]) -> &mut Self {
        if !values.is_empty() {
            let joined = values
                .iter()
                .map(|v| v.as_ref())
                .collect::<Vec<_>>()
                .join(",");
            self.push(key, joined);
        }
        self
    }

    /// `multi` collection format: the key is repeated for each value.
    pub fn push_multi<T: ToString>(&mut self, key: &str, values: &[T]) -> &mut Self {
        for value in values {
            self.push(key, value.to_string());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    pub fn as_pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

pub fn format_datetime(value: &DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pagination {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

impl Pagination {
    pub fn new(limit: Option<u32>, offset: Option<u32>) -> Self {
        Self { limit, offset }
    }

    pub fn page(limit: u32, offset: u32) -> Self {
        Self {
            limit: Some(limit),
            offset: Some(offset),
        }
    }

    pub fn apply(&self, query: &mut QueryParams) {
        query.push_opt("limit", self.limit);
        query.push_opt("offset", self.offset);
    }
}

/// Inclusive bounds sent as `<name>_gte` / `<name>_lte`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub gte: Option<DateTime<Utc>>,
    pub lte: Option<DateTime<Utc>>,
}

impl DateRange {
    pub fn between(gte: DateTime<Utc>, lte: DateTime<Utc>) -> Self {
        Self {
            gte: Some(gte),
            lte: Some(lte),
        }
    }

    pub fn since(gte: DateTime<Utc>) -> Self {
        Self {
            gte: Some(gte),
            lte: None,
        }
    }

    pub fn until(lte: DateTime<Utc>) -> Self {
        Self {
            gte: None,
            lte: Some(lte),
        }
    }

    pub fn apply(&self, name: &str, query: &mut QueryParams) {
        query.push_datetime(&format!("{}_gte", name), self.gte.as_ref());
        query.push_datetime(&format!("{}_lte", name), self.lte.as_ref());
    }
}

/// Fields a PATCH request may change. Empty means "all writable fields".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateMask(Vec<String>);

impl UpdateMask {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(fields.into_iter().map(Into::into).collect())
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn apply(&self, query: &mut QueryParams) {
        query.push_csv("update_mask", &self.0);
    }
}

impl<S: Into<String>> FromIterator<S> for UpdateMask {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

/// Sort key for list endpoints that support `order_by`; prefix with `-`
/// for descending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListOrder {
    pub order_by: Option<String>,
}

impl ListOrder {
    pub fn by(field: impl Into<String>) -> Self {
        Self {
            order_by: Some(field.into()),
        }
    }

    pub fn apply(&self, query: &mut QueryParams) {
        query.push_opt("order_by", self.order_by.as_deref());
    }
}

/// `GET /dags/{dag_id}/dagRuns` 的篩選條件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DagRunFilter {
    pub pagination: Pagination,
    pub execution_date: DateRange,
    pub start_date: DateRange,
    pub end_date: DateRange,
}

impl DagRunFilter {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.pagination.apply(&mut query);
        self.execution_date.apply("execution_date", &mut query);
        self.start_date.apply("start_date", &mut query);
        self.end_date.apply("end_date", &mut query);
        query
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskInstanceFilter {
    pub pagination: Pagination,
    pub execution_date: DateRange,
    pub start_date: DateRange,
    pub end_date: DateRange,
    pub duration_gte: Option<f64>,
    pub duration_lte: Option<f64>,
    pub state: Vec<TaskState>,
    pub pool: Vec<String>,
    pub queue: Vec<String>,
}

impl TaskInstanceFilter {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        self.pagination.apply(&mut query);
        self.execution_date.apply("execution_date", &mut query);
        self.start_date.apply("start_date", &mut query);
        self.end_date.apply("end_date", &mut query);
        query.push_opt("duration_gte", self.duration_gte);
        query.push_opt("duration_lte", self.duration_lte);
        query.push_multi("state", &self.state);
        query.push_multi("pool", &self.pool);
        query.push_multi("queue", &self.queue);
        query
    }
}

/// Options of the task log endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogOptions {
    pub full_content: Option<bool>,
    /// Continuation token from the previous chunk.
    pub token: Option<String>,
}

impl LogOptions {
    pub fn to_query(&self) -> QueryParams {
        let mut query = QueryParams::new();
        query.push_opt("full_content", self.full_content);
        query.push_opt("token", self.token.as_deref());
        query
    }
}
