use anyhow::Context;
use apiscope_core::{Presenters, RouteManifest};
use std::path::Path;

pub fn describe(
    manifest: &RouteManifest,
    resource: &str,
    namespace: Option<&str>,
) -> anyhow::Result<String> {
    let presenters = Presenters::new();
    manifest.install(&presenters);

    let namespace = presenters.namespace_or_default(namespace);
    let hierarchy = presenters.hierarchy();
    let chain: Vec<_> = hierarchy.ancestry(resource).collect();
    let presenter = presenters
        .resolve(Some(&namespace), resource)
        .with_context(|| format!("resolving {resource}"))?;

    let fields = presenter.fields();
    let mut out = format!(
        "{} [{}] -> {}\n  via: {}",
        resource,
        namespace,
        presenter.name(),
        chain.join(" < ")
    );
    if !fields.is_empty() {
        out.push_str(&format!("\n  fields: {}", fields.join(", ")));
    }
    Ok(out)
}

pub fn run(manifest: &Path, resource: &str, namespace: Option<&str>) -> anyhow::Result<()> {
    let manifest = RouteManifest::load(manifest)
        .with_context(|| format!("loading manifest {}", manifest.display()))?;
    println!("{}", describe(&manifest, resource, namespace)?);
    Ok(())
}
