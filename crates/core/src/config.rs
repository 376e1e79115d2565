use crate::builder::BuilderOptions;
use crate::error::{ApiscopeError, Result};
use crate::format::FormatterKind;
use apiscope_api::FormatterOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Settings for one documentation-generation run.
///
/// Loaded from a JSON file; command-line flags override individual fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiscopeConfig {
    /// Route manifest describing the host application.
    pub manifest: Option<PathBuf>,
    /// Namespace documented by this run; the default namespace when absent.
    pub namespace: Option<String>,
    /// Process-wide default namespace applied before building.
    pub default_namespace: Option<String>,
    /// Formatter name, `json` when absent.
    pub format: Option<String>,
    pub formatter: FormatterOptions,
    pub builder: BuilderOptions,
    /// Destination file; standard output when absent.
    pub output: Option<PathBuf>,
}

impl ApiscopeConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: ApiscopeConfig = serde_json::from_str(&content)
            .map_err(|e| ApiscopeError::Config(format!("{}: {}", path.display(), e)))?;

        // Relative paths are taken relative to the config file.
        let base = path.parent().unwrap_or_else(|| Path::new("."));
        config.manifest = config.manifest.map(|p| resolve_relative(base, p));
        config.output = config.output.map(|p| resolve_relative(base, p));
        Ok(config)
    }

    pub fn formatter_kind(&self) -> Result<FormatterKind> {
        match &self.format {
            Some(name) => Ok(name.parse::<FormatterKind>()?),
            None => Ok(FormatterKind::default()),
        }
    }
}

fn resolve_relative(base: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}
