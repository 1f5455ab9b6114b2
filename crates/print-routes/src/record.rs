//! Route metadata model.
//!
//! A [`RouteRecord`] is what the host server hands to the reporter for every
//! registered route: the URL template, the HTTP methods it answers, a typed
//! metadata mapping ([`RouteConfig`]) and an optional query-string shape
//! ([`QuerySchema`]).
//!
//! Records are immutable after registration. Compact mode produces new
//! merged records rather than mutating the originals.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// HTTP method token attached to a route registration.
///
/// The standard vocabulary is closed; anything else is carried verbatim
/// (uppercased) in [`Method::Other`] so nonstandard registrations still
/// display and sort deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    /// GET method.
    Get,
    /// POST method.
    Post,
    /// PUT method.
    Put,
    /// DELETE method.
    Delete,
    /// HEAD method.
    Head,
    /// PATCH method.
    Patch,
    /// OPTIONS method.
    Options,
    /// Nonstandard token, kept verbatim (uppercased).
    Other(String),
}

impl Method {
    /// Get the display token for this method.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Head => "HEAD",
            Self::Patch => "PATCH",
            Self::Options => "OPTIONS",
            Self::Other(token) => token,
        }
    }

    /// Display priority of this method within a route row.
    ///
    /// Listed methods sort in the fixed order
    /// `GET, POST, PUT, DELETE, HEAD, PATCH, OPTIONS`; every other token
    /// sorts after all of them (stable among themselves).
    #[must_use]
    pub fn sort_rank(&self) -> usize {
        match self {
            Self::Get => 0,
            Self::Post => 1,
            Self::Put => 2,
            Self::Delete => 3,
            Self::Head => 4,
            Self::Patch => 5,
            Self::Options => 6,
            Self::Other(_) => 7,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Method {
    fn from(token: &str) -> Self {
        match token.to_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            "HEAD" => Self::Head,
            "PATCH" => Self::Patch,
            "OPTIONS" => Self::Options,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Method {
    fn from(token: String) -> Self {
        Self::from(token.as_str())
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.as_str().to_string()
    }
}

/// Typed per-route metadata mapping.
///
/// Two keys are recognized by the reporter; everything else the host
/// attaches lands in `extra` untouched. Host-provided values of the wrong
/// type are tolerated: a non-boolean `hide` reads as `false`, a non-string
/// `description` reads as no description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Exclude the route from the report entirely.
    #[serde(default, deserialize_with = "lenient_bool")]
    pub hide: bool,
    /// Free-form description shown in an extra column when present.
    ///
    /// Presence matters, not truthiness: `Some(String::new())` still turns
    /// the description column on.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_string"
    )]
    pub description: Option<String>,
    /// Unrecognized keys, preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn lenient_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_bool().unwrap_or(false))
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    })
}

/// One accepted query-string parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    /// Parameter name.
    pub name: String,
    /// Whether the parameter must be supplied.
    pub required: bool,
}

/// Structural description of a route's accepted query string.
///
/// Parameters keep their declaration order; that order is the render order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuerySchema {
    /// Declared parameters, in declaration order.
    pub params: Vec<QueryParam>,
}

impl QuerySchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a required parameter.
    #[must_use]
    pub fn required(mut self, name: impl Into<String>) -> Self {
        self.params.push(QueryParam {
            name: name.into(),
            required: true,
        });
        self
    }

    /// Declare an optional parameter.
    #[must_use]
    pub fn optional(mut self, name: impl Into<String>) -> Self {
        self.params.push(QueryParam {
            name: name.into(),
            required: false,
        });
        self
    }

    /// Check if the schema declares no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// One registered route, as announced by the host server.
///
/// Invariant: `methods` is non-empty for every record the host registers.
/// `path` may contain named parameter segments (`:id`) or optional bracket
/// segments (`[:id]`); the same path may appear on multiple records when
/// methods are registered separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteRecord {
    /// URL template.
    pub path: String,
    /// HTTP methods this registration answers.
    pub methods: Vec<Method>,
    /// Per-route metadata.
    #[serde(default)]
    pub config: RouteConfig,
    /// Accepted query-string shape, if the host declared one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<QuerySchema>,
}

impl RouteRecord {
    /// Create a record for a path, with no methods yet.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            methods: Vec::new(),
            config: RouteConfig::default(),
            query: None,
        }
    }

    /// Add one method.
    #[must_use]
    pub fn method(mut self, method: impl Into<Method>) -> Self {
        self.methods.push(method.into());
        self
    }

    /// Add several methods.
    #[must_use]
    pub fn methods<I, M>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Method>,
    {
        self.methods.extend(methods.into_iter().map(Into::into));
        self
    }

    /// Set the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.config.description = Some(description.into());
        self
    }

    /// Set the hide flag.
    #[must_use]
    pub fn hide(mut self, hide: bool) -> Self {
        self.config.hide = hide;
        self
    }

    /// Attach an unrecognized metadata key.
    #[must_use]
    pub fn config_value(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.config.extra.insert(key.into(), value);
        self
    }

    /// Attach a query-string schema.
    #[must_use]
    pub fn query(mut self, schema: QuerySchema) -> Self {
        self.query = Some(schema);
        self
    }

    /// Whether this record carries a description key (even an empty one).
    #[must_use]
    pub fn has_description(&self) -> bool {
        self.config.description.is_some()
    }
}
