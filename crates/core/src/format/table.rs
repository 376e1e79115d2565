use super::Formatter;
use crate::model::Atlas;
use apiscope_api::{ApiError, ApiResult, Endpoint, FormatterOptions};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Extension key selecting the table style: `markdown` (default), `ascii`, `psql`.
pub const STYLE_OPTION: &str = "style";

#[derive(Tabled)]
struct EndpointRow {
    #[tabled(rename = "Method")]
    method: String,
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Presenter")]
    presenter: String,
}

impl EndpointRow {
    fn from_endpoint(endpoint: &Endpoint) -> Self {
        let method = if endpoint.methods().is_empty() {
            "ANY".to_string()
        } else {
            endpoint
                .methods()
                .iter()
                .map(|m| m.as_str())
                .collect::<Vec<_>>()
                .join("|")
        };
        let target = match (endpoint.controller(), endpoint.action()) {
            (Some(c), Some(a)) => format!("{c}#{a}"),
            (Some(c), None) => c.to_string(),
            _ => "-".to_string(),
        };
        let presenter = endpoint
            .presenter()
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "-".to_string());
        Self {
            method,
            path: endpoint.path().to_string(),
            target,
            presenter,
        }
    }
}

/// Human-readable overview of an atlas, one row per endpoint.
#[derive(Debug, Clone)]
pub struct AggregateTable {
    options: FormatterOptions,
}

impl Formatter<Atlas> for AggregateTable {
    fn with_options(options: FormatterOptions) -> Self {
        Self { options }
    }

    fn format(&self, atlas: &Atlas) -> ApiResult<String> {
        let rows: Vec<EndpointRow> = atlas.iter().map(EndpointRow::from_endpoint).collect();
        let mut table = Table::new(&rows);
        match self.options.extension_str(STYLE_OPTION).unwrap_or("markdown") {
            "markdown" => table.with(Style::markdown()),
            "ascii" => table.with(Style::ascii()),
            "psql" => table.with(Style::psql()),
            other => {
                return Err(ApiError::InvalidArgument(format!(
                    "unknown table style: {other}"
                )));
            }
        };
        Ok(table.to_string().trim_end().to_string())
    }
}
