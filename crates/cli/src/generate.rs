use anyhow::Context;
use apiscope_core::{ApiscopeConfig, Presenters};
use std::path::PathBuf;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub manifest: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub namespace: Option<String>,
    pub format: Option<String>,
    pub pretty: bool,
    pub output: Option<PathBuf>,
}

pub fn resolve_config(overrides: Overrides) -> anyhow::Result<ApiscopeConfig> {
    let mut config = match &overrides.config {
        Some(path) => ApiscopeConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ApiscopeConfig::default(),
    };

    if overrides.manifest.is_some() {
        config.manifest = overrides.manifest;
    }
    if overrides.namespace.is_some() {
        config.namespace = overrides.namespace;
    }
    if overrides.format.is_some() {
        config.format = overrides.format;
    }
    if overrides.pretty {
        config.formatter.pretty = true;
    }
    if overrides.output.is_some() {
        config.output = overrides.output;
    }
    Ok(config)
}

pub fn run(overrides: Overrides) -> anyhow::Result<()> {
    let config = resolve_config(overrides)?;
    tracing::info!("Generating documentation from {:?}", config.manifest);
    let presenters = Presenters::global();
    let generated = apiscope_runtime::generate(&config, presenters)
        .context("generating documentation")?;
    apiscope_runtime::write_output(config.output.as_deref(), &generated.rendered)
        .context("writing documentation")?;
    Ok(())
}
