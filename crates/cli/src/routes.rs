use anyhow::Context;
use apiscope_api::RouteIntrospector;
use apiscope_core::{BuilderOptions, EndpointBuilder, Presenters, RouteManifest, RouteStatus};
use std::path::Path;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RouteView {
    #[tabled(rename = "Path")]
    path: String,
    #[tabled(rename = "Controller")]
    controller: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn render(manifest: &RouteManifest, base_controller: Option<String>) -> anyhow::Result<String> {
    let presenters = Presenters::new();
    manifest.install(&presenters);

    let mut options = BuilderOptions::default();
    if let Some(base) = base_controller {
        options.base_controller = base;
    }
    manifest.apply_overrides(&mut options);

    let builder = EndpointBuilder::new(&presenters, options);
    let hierarchy = presenters.hierarchy();
    let views: Vec<RouteView> = manifest
        .routes()?
        .iter()
        .map(|route| {
            let (controller, status) = match builder.classify(route, &hierarchy) {
                RouteStatus::Included { controller, resource } => {
                    (controller, format!("documented ({resource})"))
                }
                RouteStatus::MissingController => ("-".to_string(), "no controller".to_string()),
                RouteStatus::UnknownController(c) => (c, "unknown controller".to_string()),
                RouteStatus::ForeignController(c) => (
                    c,
                    format!("not a {}", builder.options().base_controller),
                ),
            };
            RouteView {
                path: route.path.render(),
                controller,
                status,
            }
        })
        .collect();

    Ok(Table::new(&views).with(Style::psql()).to_string())
}

pub fn run(manifest: &Path, base_controller: Option<String>) -> anyhow::Result<()> {
    let manifest = RouteManifest::load(manifest)
        .with_context(|| format!("loading manifest {}", manifest.display()))?;
    println!("{}", render(&manifest, base_controller)?);
    Ok(())
}
