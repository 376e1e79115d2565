use apiscope_api::{FormatterOptions, RouteIntrospector};
use apiscope_core::{
    AggregateJson, BuilderOptions, EndpointBuilder, Formatter, FormatterKind, Presenters,
    RouteManifest,
};
use std::io::Write;

const MANIFEST: &str = r#"{
    "routes": [
        {"path": "/rails/info(.:format)", "defaults": {"controller": "rails/info", "action": "index"}},
        {"path": "/assets/*path"},
        {"name": "api_posts", "path": "/api/posts(.:format)",
         "defaults": {"controller": "api/posts", "action": "index"},
         "constraints": {"request_method": "^GET$"}},
        {"path": "/api/posts/:id(.:format)",
         "defaults": {"controller": "api/posts", "action": "destroy"},
         "constraints": {"request_method": "^DELETE$"}},
        {"path": "/api/tags(.:format)",
         "defaults": {"controller": "api/tags", "action": "index"},
         "constraints": {"request_method": "GET|HEAD"}}
    ],
    "types": {
        "ActionController::Base": null,
        "ApplicationController": "ActionController::Base",
        "Rails::InfoController": "ActionController::Base",
        "Api::PostsController": "ApplicationController",
        "Api::TagsController": "ApplicationController",
        "Record": null,
        "Post": "Record"
    },
    "presenters": [
        {"resource": "Record", "name": "RecordPresenter", "fields": ["id"]},
        {"namespace": "v1", "resource": "Post", "name": "PostPresenter", "fields": ["id", "title"]}
    ]
}"#;

fn load_manifest() -> (tempfile::TempDir, RouteManifest) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("routes.json");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(MANIFEST.as_bytes()).unwrap();
    let manifest = RouteManifest::load(&path).unwrap();
    (dir, manifest)
}

#[test]
fn test_manifest_to_compact_json() {
    let (_dir, manifest) = load_manifest();
    let presenters = Presenters::new();
    manifest.install(&presenters);

    let routes = manifest.routes().unwrap();
    let atlas = EndpointBuilder::new(&presenters, BuilderOptions::default())
        .build(&routes, None)
        .unwrap();

    let out = AggregateJson::call(&atlas, FormatterOptions::default()).unwrap();
    assert_eq!(
        out,
        concat!(
            r#"[{"path":"/api/posts","methods":["GET"],"name":"api_posts","#,
            r#""controller":"Api::PostsController","action":"index","resource":"Post","#,
            r#""presenter":"RecordPresenter","fields":["id"]},"#,
            r#"{"path":"/api/posts/:id","methods":["DELETE"],"controller":"Api::PostsController","#,
            r#""action":"destroy","params":["id"],"resource":"Post","#,
            r#""presenter":"RecordPresenter","fields":["id"]},"#,
            r#"{"path":"/api/tags","methods":["GET","HEAD"],"controller":"Api::TagsController","#,
            r#""action":"index","resource":"Tag"}]"#
        )
    );
}

#[test]
fn test_namespace_selects_presenters() {
    let (_dir, manifest) = load_manifest();
    let presenters = Presenters::new();
    manifest.install(&presenters);
    presenters.set_default_namespace("v1");

    let routes = manifest.routes().unwrap();
    let atlas = EndpointBuilder::new(&presenters, BuilderOptions::default())
        .build(&routes, None)
        .unwrap();

    assert_eq!(atlas.namespace(), "v1");
    let names: Vec<_> = atlas
        .iter()
        .map(|e| e.presenter().map(|p| p.name().to_string()))
        .collect();
    assert_eq!(
        names,
        vec![Some("PostPresenter".to_string()), Some("PostPresenter".to_string()), None]
    );
}

#[test]
fn test_pretty_output_by_kind() {
    let (_dir, manifest) = load_manifest();
    let presenters = Presenters::new();
    manifest.install(&presenters);

    let routes = manifest.routes().unwrap();
    let atlas = EndpointBuilder::new(&presenters, BuilderOptions::default())
        .build(&routes[4..], None)
        .unwrap();

    let kind: FormatterKind = "json".parse().unwrap();
    let out = kind.render(&atlas, FormatterOptions::pretty()).unwrap();
    let expected = r#"[
  {
    "path": "/api/tags",
    "methods": [
      "GET",
      "HEAD"
    ],
    "controller": "Api::TagsController",
    "action": "index",
    "resource": "Tag"
  }
]"#;
    assert_eq!(out, expected);
}

#[test]
fn test_rebuild_is_deterministic() {
    let (_dir, manifest) = load_manifest();
    let presenters = Presenters::new();
    manifest.install(&presenters);
    let builder = EndpointBuilder::new(&presenters, BuilderOptions::default());

    let first = AggregateJson::call(
        &builder.build(&manifest.routes().unwrap(), None).unwrap(),
        FormatterOptions::pretty(),
    )
    .unwrap();
    let second = AggregateJson::call(
        &builder.build(&manifest.routes().unwrap(), None).unwrap(),
        FormatterOptions::pretty(),
    )
    .unwrap();
    assert_eq!(first, second);
}
