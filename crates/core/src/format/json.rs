use super::{Formatter, render_json};
use crate::model::Atlas;
use apiscope_api::{ApiResult, Endpoint, FormatterOptions};

/// Whole-collection JSON: an array of every endpoint in atlas order.
#[derive(Debug, Clone)]
pub struct AggregateJson {
    options: FormatterOptions,
}

impl Formatter<Atlas> for AggregateJson {
    fn with_options(options: FormatterOptions) -> Self {
        Self { options }
    }

    fn format(&self, atlas: &Atlas) -> ApiResult<String> {
        render_json(atlas.endpoints(), self.options.pretty)
    }
}

/// Per-endpoint JSON object.
#[derive(Debug, Clone)]
pub struct EndpointJson {
    options: FormatterOptions,
}

impl Formatter<Endpoint> for EndpointJson {
    fn with_options(options: FormatterOptions) -> Self {
        Self { options }
    }

    fn format(&self, endpoint: &Endpoint) -> ApiResult<String> {
        render_json(endpoint, self.options.pretty)
    }
}
