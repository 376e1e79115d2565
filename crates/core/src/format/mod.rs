//! Formatter pipeline.
//!
//! A formatter is built from [`FormatterOptions`] and turns either a single
//! [`Endpoint`](apiscope_api::Endpoint) or a whole [`Atlas`] into a string.
//! Every call gets a fresh instance; formatters hold no state between calls.

mod json;
mod table;

pub use json::{AggregateJson, EndpointJson};
pub use table::AggregateTable;

use crate::model::Atlas;
use apiscope_api::{ApiError, ApiResult, FormatterOptions};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub trait Formatter<I: ?Sized> {
    fn with_options(options: FormatterOptions) -> Self
    where
        Self: Sized;

    fn format(&self, input: &I) -> ApiResult<String>;

    /// Build a fresh formatter from `options` and run it once.
    fn call(input: &I, options: FormatterOptions) -> ApiResult<String>
    where
        Self: Sized,
    {
        Self::with_options(options).format(input)
    }
}

/// Aggregate formatters selectable by name at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatterKind {
    #[default]
    Json,
    Table,
}

impl FormatterKind {
    pub const ALL: [FormatterKind; 2] = [FormatterKind::Json, FormatterKind::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Json => "json",
            FormatterKind::Table => "table",
        }
    }

    pub fn render(&self, atlas: &Atlas, options: FormatterOptions) -> ApiResult<String> {
        match self {
            FormatterKind::Json => AggregateJson::call(atlas, options),
            FormatterKind::Table => AggregateTable::call(atlas, options),
        }
    }
}

impl FromStr for FormatterKind {
    type Err = ApiError;

    /// Unknown names have no formatter behind them.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatterKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ApiError::Unimplemented(s.to_string()))
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serialize `value` compactly, or pretty-printed with 2-space indentation and
/// no trailing whitespace.
pub(crate) fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> ApiResult<String> {
    if pretty {
        let out = serde_json::to_string_pretty(value)?;
        Ok(out.trim_end().to_string())
    } else {
        Ok(serde_json::to_string(value)?)
    }
}
