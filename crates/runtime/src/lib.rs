use apiscope_api::RouteIntrospector;
use apiscope_core::{
    ApiscopeConfig, ApiscopeError, Atlas, EndpointBuilder, Presenters, RouteManifest,
};
use std::path::Path;

/// Result of one documentation-generation run.
#[derive(Debug)]
pub struct Generated {
    pub atlas: Atlas,
    pub rendered: String,
}

/// Runs the whole pipeline described by `config` against `presenters`:
/// load the manifest, register its presenters, build the atlas and render it.
///
/// Any failure aborts the run; nothing is partially rendered.
pub fn generate(config: &ApiscopeConfig, presenters: &Presenters) -> apiscope_core::Result<Generated> {
    let kind = config.formatter_kind()?;
    let manifest_path = config
        .manifest
        .as_deref()
        .ok_or_else(|| ApiscopeError::Config("no route manifest given".to_string()))?;
    let manifest = RouteManifest::load(manifest_path)?;

    // Unqualified manifest presenters register into the default namespace.
    if let Some(default) = &config.default_namespace {
        presenters.set_default_namespace(default.clone());
    }
    manifest.install(presenters);

    let mut options = config.builder.clone();
    manifest.apply_overrides(&mut options);

    let routes = manifest.routes()?;
    let atlas = EndpointBuilder::new(presenters, options).build(&routes, config.namespace.as_deref())?;
    let rendered = kind.render(&atlas, config.formatter.clone())?;

    tracing::info!(
        "Rendered {} endpoints for namespace {} as {}",
        atlas.len(),
        atlas.namespace(),
        kind
    );
    Ok(Generated { atlas, rendered })
}

/// Write rendered documentation to `path`, or standard output when `None`.
pub fn write_output(path: Option<&Path>, rendered: &str) -> std::io::Result<()> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
            std::fs::write(path, rendered)?;
            tracing::info!("Wrote documentation to {}", path.display());
            Ok(())
        }
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}

/// Initializes the logging system for a specific component.
/// This delegates to the core logging module.
pub fn init_logging(component: &str, to_stderr: bool) -> Option<impl Drop> {
    Some(apiscope_core::logging::init_logging(component, to_stderr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apiscope_api::ApiError;

    fn write_manifest(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("routes.json");
        std::fs::write(
            &path,
            r#"{
                "routes": [
                    {"path": "/blah(.:format)", "defaults": {"controller": "blah", "action": "index"}},
                    {"path": "/orphan"}
                ],
                "types": {"ApplicationController": null, "BlahController": "ApplicationController"}
            }"#,
        )
        .unwrap();
        path
    }

    #[test]
    fn test_generate_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = ApiscopeConfig {
            manifest: Some(write_manifest(dir.path())),
            default_namespace: Some("v3".into()),
            ..ApiscopeConfig::default()
        };

        let presenters = Presenters::new();
        let generated = generate(&config, &presenters).unwrap();
        assert_eq!(generated.atlas.namespace(), "v3");
        assert_eq!(
            generated.rendered,
            r#"[{"path":"/blah","controller":"BlahController","action":"index","resource":"Blah"}]"#
        );
    }

    #[test]
    fn test_default_namespace_applies_to_manifest_presenters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");
        std::fs::write(
            &path,
            r#"{
                "routes": [
                    {"path": "/posts(.:format)", "defaults": {"controller": "posts", "action": "index"}}
                ],
                "types": {"ApplicationController": null, "PostsController": "ApplicationController"},
                "presenters": [{"resource": "Post", "name": "PostPresenter", "fields": ["id"]}]
            }"#,
        )
        .unwrap();
        let config = ApiscopeConfig {
            manifest: Some(path),
            default_namespace: Some("v1".into()),
            ..ApiscopeConfig::default()
        };

        let presenters = Presenters::new();
        let generated = generate(&config, &presenters).unwrap();
        assert_eq!(presenters.namespaces(), vec!["v1"]);
        assert_eq!(generated.atlas.namespace(), "v1");
        assert!(generated.rendered.contains(r#""presenter":"PostPresenter""#));
    }

    #[test]
    fn test_missing_manifest_is_config_error() {
        let presenters = Presenters::new();
        let err = generate(&ApiscopeConfig::default(), &presenters).unwrap_err();
        assert!(matches!(err, ApiscopeError::Config(_)));
    }

    #[test]
    fn test_unknown_format_aborts_before_loading() {
        let presenters = Presenters::new();
        let config = ApiscopeConfig {
            format: Some("xml".into()),
            ..ApiscopeConfig::default()
        };
        let err = generate(&config, &presenters).unwrap_err();
        assert!(matches!(err, ApiscopeError::Api(ApiError::Unimplemented(_))));
    }

    #[test]
    fn test_write_output_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("docs/api.json");
        write_output(Some(&path), "[]").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
