use std::fs;

use stylext_core::{ChunkSource, Compiler, CompilerOptions, HtmlPageOptions};
use stylext_plugin_script::{ScriptAttribute, ScriptAttributeOptions, ScriptExtHtmlPlugin};
use tempfile::TempDir;

fn project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.js"), "console.log('main');\n").unwrap();
    fs::write(dir.path().join("vendor.js"), "window.vendor = {};\n").unwrap();
    dir
}

#[test]
fn rendered_page_carries_script_attributes() {
    let dir = project();
    let mut compiler = Compiler::new(CompilerOptions::new(dir.path()).filename("[name]_bundle.js"));
    compiler
        .chunk(ChunkSource::new("vendor").script("vendor.js"))
        .chunk(ChunkSource::new("index").script("index.js"))
        .page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(
            ScriptExtHtmlPlugin::new(
                ScriptAttributeOptions::new(ScriptAttribute::Defer).sync("^vendor"),
            )
            .unwrap(),
        )
        .unwrap();

    let output = compiler.compile().unwrap();
    let html = output.html("index.html").unwrap();

    assert!(html.contains(r#"<script type="text/javascript" src="vendor_bundle.js"></script>"#));
    assert!(html.contains(r#"<script type="text/javascript" src="index_bundle.js" defer></script>"#));
}

#[test]
fn public_path_is_part_of_the_matched_src() {
    let dir = project();
    let mut compiler = Compiler::new(
        CompilerOptions::new(dir.path())
            .public_path("/static/")
            .filename("[name].js"),
    );
    compiler
        .chunk(ChunkSource::new("index").script("index.js"))
        .page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(
            ScriptExtHtmlPlugin::new(
                ScriptAttributeOptions::new(ScriptAttribute::Sync).async_script("^/static/"),
            )
            .unwrap(),
        )
        .unwrap();

    let output = compiler.compile().unwrap();
    assert!(
        output
            .html("index.html")
            .unwrap()
            .contains(r#"src="/static/index.js" async></script>"#)
    );
}
