use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static VERB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(GET|POST|PUT|PATCH|DELETE|HEAD|OPTIONS)\b").expect("valid verb regex")
});

static PARAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[:*]([A-Za-z_][A-Za-z0-9_]*)").expect("valid param regex"));

/// HTTP verbs a route may be constrained to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Head,
    Options,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
        }
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            "HEAD" => Ok(HttpMethod::Head),
            "OPTIONS" => Ok(HttpMethod::Options),
            other => Err(format!("unknown http method: {other}")),
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route path spec as the host framework reports it, e.g. `/posts/:id(.:format)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PathPattern(String);

impl PathPattern {
    pub fn new(spec: impl Into<String>) -> Self {
        Self(spec.into())
    }

    pub fn spec(&self) -> &str {
        &self.0
    }

    /// Render the required part of the pattern: optional `( ... )` groups are
    /// dropped, nested groups included.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.0.len());
        let mut depth = 0usize;
        for ch in self.0.chars() {
            match ch {
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                _ if depth == 0 => out.push(ch),
                _ => {}
            }
        }
        if out.is_empty() {
            out.push('/');
        }
        out
    }

    /// Names of the dynamic segments (`:id`, `*path`) in the rendered path.
    pub fn params(&self) -> Vec<String> {
        PARAM_RE
            .captures_iter(&self.render())
            .map(|c| c[1].to_string())
            .collect()
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PathPattern {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// One entry of the host framework's route table.
///
/// Produced fresh on every introspection pass and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub name: Option<String>,
    pub path: PathPattern,
    #[serde(default)]
    pub defaults: IndexMap<String, String>,
    #[serde(default)]
    pub constraints: IndexMap<String, String>,
}

impl Route {
    pub const CONTROLLER: &'static str = "controller";
    pub const ACTION: &'static str = "action";
    pub const REQUEST_METHOD: &'static str = "request_method";

    pub fn new(path: impl Into<PathPattern>) -> Self {
        Self {
            name: None,
            path: path.into(),
            defaults: IndexMap::new(),
            constraints: IndexMap::new(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn to(mut self, controller: impl Into<String>, action: impl Into<String>) -> Self {
        self.defaults.insert(Self::CONTROLLER.to_string(), controller.into());
        self.defaults.insert(Self::ACTION.to_string(), action.into());
        self
    }

    pub fn via(mut self, request_method: impl Into<String>) -> Self {
        self.constraints
            .insert(Self::REQUEST_METHOD.to_string(), request_method.into());
        self
    }

    /// Controller default, ignoring blank values.
    pub fn controller(&self) -> Option<&str> {
        self.default_value(Self::CONTROLLER)
    }

    pub fn action(&self) -> Option<&str> {
        self.default_value(Self::ACTION)
    }

    /// Verbs matched by the `request_method` constraint, in pattern order.
    pub fn request_methods(&self) -> Vec<HttpMethod> {
        let Some(pattern) = self.constraints.get(Self::REQUEST_METHOD) else {
            return Vec::new();
        };
        let mut methods = Vec::new();
        for cap in VERB_RE.captures_iter(pattern) {
            if let Ok(method) = cap[1].parse::<HttpMethod>() {
                if !methods.contains(&method) {
                    methods.push(method);
                }
            }
        }
        methods
    }

    fn default_value(&self, key: &str) -> Option<&str> {
        self.defaults
            .get(key)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}
