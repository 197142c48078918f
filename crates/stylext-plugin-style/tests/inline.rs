use std::path::PathBuf;

use stylext_core::{
    BuildOutput, Chunk, ChunkSource, Compilation, Compiler, CompilerOptions, HtmlPageOptions,
};
use stylext_plugin_script::{ScriptAttribute, ScriptAttributeOptions, ScriptExtHtmlPlugin};
use stylext_plugin_style::{StyleExtHtmlPlugin, StyleInlineOptions, StylePosition};
use tempfile::TempDir;

const PAGE1_CSS: &str = "body {\n  background: snow;\n}\n";

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn one_stylesheet() -> Compiler {
    let mut compiler = Compiler::new(
        CompilerOptions::new(fixture("one_stylesheet"))
            .filename("index_bundle.js")
            .css_filename("styles.css"),
    );
    compiler
        .chunk(ChunkSource::new("main").script("index.js").style("styles.css"))
        .page(HtmlPageOptions::new("index.html"));
    compiler
}

fn multiple_entries() -> Compiler {
    let mut compiler = Compiler::new(CompilerOptions::new(fixture("multiple_entries")));
    compiler
        .chunk(ChunkSource::new("page1").script("page1.js").style("page1.css"))
        .chunk(ChunkSource::new("page2").script("page2.js").style("page2.css"));
    compiler
}

fn inliner(options: StyleInlineOptions) -> StyleExtHtmlPlugin {
    StyleExtHtmlPlugin::new(options).unwrap()
}

fn page(output: &BuildOutput, name: &str) -> String {
    output.html(name).unwrap().to_string()
}

#[test]
fn inlines_single_stylesheet() {
    let mut compiler = one_stylesheet();
    compiler.plugin(inliner(StyleInlineOptions::new())).unwrap();

    let output = compiler.compile().unwrap();
    let html = page(&output, "index.html");

    assert!(html.contains(&format!("    <style>{PAGE1_CSS}</style>\n  </head>")));
    assert!(!html.contains("<link"));
    assert!(html.contains(r#"<script type="text/javascript" src="index_bundle.js"></script>"#));
    assert!(output.asset("styles.css").is_none());
    assert!(output.asset("index_bundle.js").is_some());
}

#[test]
fn without_plugin_link_is_kept() {
    let output = one_stylesheet().compile().unwrap();
    let html = page(&output, "index.html");

    assert!(html.contains(r#"<link href="styles.css" rel="stylesheet">"#));
    assert!(!html.contains("<style>"));
    assert!(output.asset("styles.css").is_some());
}

#[test]
fn disabled_plugin_matches_plain_build() {
    let plain = one_stylesheet().compile().unwrap();

    let mut compiler = one_stylesheet();
    compiler
        .plugin(inliner(StyleInlineOptions::new().enabled(false)))
        .unwrap();
    let disabled = compiler.compile().unwrap();

    assert_eq!(page(&plain, "index.html"), page(&disabled, "index.html"));
    assert!(disabled.asset("styles.css").is_some());
}

#[test]
fn pages_without_css_are_untouched() {
    let build = |with_plugin: bool| {
        let mut compiler = Compiler::new(CompilerOptions::new(fixture("one_stylesheet")));
        compiler
            .chunk(ChunkSource::new("main").script("index.js"))
            .page(HtmlPageOptions::new("index.html"));
        if with_plugin {
            compiler.plugin(inliner(StyleInlineOptions::new())).unwrap();
        }
        page(&compiler.compile().unwrap(), "index.html")
    };

    assert_eq!(build(false), build(true));
}

#[test]
fn multiple_entries_get_their_own_styles() {
    let mut compiler = multiple_entries();
    compiler
        .page(HtmlPageOptions::new("page1.html").chunks(["page1"]))
        .page(HtmlPageOptions::new("page2.html").chunks(["page2"]));
    compiler
        .plugin(inliner(StyleInlineOptions::new().chunks(["page1"])))
        .unwrap()
        .plugin(inliner(StyleInlineOptions::new().chunks(["page2"])))
        .unwrap();

    let output = compiler.compile().unwrap();
    let page1 = page(&output, "page1.html");
    let page2 = page(&output, "page2.html");

    assert!(page1.contains("background: snow;"));
    assert!(!page1.contains("colour: grey;"));
    assert!(page1.contains(r#"src="page1.js""#));

    assert!(
        page2.contains("@import url(https://fonts.googleapis.com/css?family=Indie+Flower);")
    );
    assert!(page2.contains("colour: grey;"));
    assert!(page2.contains("[contenteditable='true']"));
    assert!(!page2.contains("background: snow;"));

    assert!(output.asset("page1.css").is_none());
    assert!(output.asset("page2.css").is_none());
}

#[test]
fn chunk_filters_split_instances() {
    let mut compiler = multiple_entries();
    compiler.page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(inliner(
            StyleInlineOptions::new()
                .chunks(["page1"])
                .position(StylePosition::HeadTop),
        ))
        .unwrap()
        .plugin(inliner(
            StyleInlineOptions::new()
                .chunks(["page2"])
                .position(StylePosition::BodyBottom),
        ))
        .unwrap();

    let html = page(&compiler.compile().unwrap(), "index.html");

    assert!(html.contains(&format!("<head><style>{PAGE1_CSS}</style>")));
    let page2_style = html.find("colour: grey;").unwrap();
    let body_open = html.find("<body>").unwrap();
    let last_script = html.find(r#"src="page2.js""#).unwrap();
    assert!(page2_style > body_open);
    assert!(page2_style > last_script);
    assert!(html.trim_end().ends_with("</style></body>\n</html>"));
    assert!(!html.contains("<link"));
}

#[test]
fn filtered_out_chunk_keeps_its_link() {
    let mut compiler = multiple_entries();
    compiler.page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(inliner(StyleInlineOptions::new().chunks(["page1"])))
        .unwrap();

    let output = compiler.compile().unwrap();
    let html = page(&output, "index.html");

    assert!(html.contains("background: snow;"));
    assert!(html.contains(r#"<link href="page2.css" rel="stylesheet">"#));
    assert!(output.asset("page1.css").is_none());
    assert!(output.asset("page2.css").is_some());
}

#[test]
fn overlapping_filters_first_instance_wins() {
    let mut compiler = multiple_entries();
    compiler.page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(inliner(StyleInlineOptions::new().chunks(["page1"])))
        .unwrap()
        .plugin(inliner(
            StyleInlineOptions::new()
                .chunks(["page1", "page2"])
                .minify(true),
        ))
        .unwrap();

    let html = page(&compiler.compile().unwrap(), "index.html");

    // page1 was inlined verbatim by the first instance, page2 minified by the second.
    assert_eq!(html.matches("background: snow;").count(), 1);
    assert!(!html.contains("background:snow"));
    assert!(html.contains("colour:grey"));
    assert_eq!(html.matches("<style>").count(), 2);
}

#[test]
fn file_option_limits_inlining() {
    let mut compiler = multiple_entries();
    compiler.page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(inliner(StyleInlineOptions::new().file("page2.css")))
        .unwrap();

    let html = page(&compiler.compile().unwrap(), "index.html");
    assert!(html.contains(r#"<link href="page1.css" rel="stylesheet">"#));
    assert!(html.contains("colour: grey;"));
}

#[test]
fn css_pattern_limits_inlining() {
    let mut compiler = multiple_entries();
    compiler.page(HtmlPageOptions::new("index.html"));
    compiler
        .plugin(inliner(StyleInlineOptions::new().css_pattern(r"^page1\.css$")))
        .unwrap();

    let html = page(&compiler.compile().unwrap(), "index.html");
    assert!(html.contains("background: snow;"));
    assert!(html.contains(r#"<link href="page2.css" rel="stylesheet">"#));
}

#[test]
fn public_path_prefixes_the_link() {
    let mut compiler = Compiler::new(
        CompilerOptions::new(fixture("one_stylesheet"))
            .public_path("/static/")
            .filename("index_bundle.js")
            .css_filename("styles.css"),
    );
    compiler
        .chunk(ChunkSource::new("main").script("index.js").style("styles.css"))
        .page(HtmlPageOptions::new("index.html"));
    compiler.plugin(inliner(StyleInlineOptions::new())).unwrap();

    let output = compiler.compile().unwrap();
    let html = page(&output, "index.html");
    assert!(html.contains("<style>"));
    assert!(html.contains(r#"src="/static/index_bundle.js""#));
    assert!(output.asset("styles.css").is_none());
}

#[test]
fn template_without_head_skips_head_positions() {
    let mut compiler = one_stylesheet();
    compiler.page(
        HtmlPageOptions::new("fragment.html")
            .template("<div>\n{{ head_tags }}{{ body_tags }}</div>\n"),
    );
    compiler
        .plugin(inliner(
            StyleInlineOptions::new().position(StylePosition::HeadBottom),
        ))
        .unwrap();

    let output = compiler.compile().unwrap();
    let fragment = page(&output, "fragment.html");
    assert!(fragment.contains(r#"<link href="styles.css" rel="stylesheet">"#));

    // index.html has a head, so the asset was inlined there but is still
    // linked by the fragment and must be kept.
    assert!(page(&output, "index.html").contains("<style>"));
    assert!(output.asset("styles.css").is_some());
}

#[test]
fn works_alongside_script_attributes() {
    let mut compiler = one_stylesheet();
    compiler
        .plugin(
            ScriptExtHtmlPlugin::new(ScriptAttributeOptions::new(ScriptAttribute::Async))
                .unwrap(),
        )
        .unwrap()
        .plugin(inliner(StyleInlineOptions::new()))
        .unwrap();

    let html = page(&compiler.compile().unwrap(), "index.html");
    assert!(html.contains(&format!("<style>{PAGE1_CSS}</style>")));
    assert!(
        html.contains(r#"<script type="text/javascript" src="index_bundle.js" async></script>"#)
    );
}

#[test]
fn registration_order_does_not_matter_for_interop() {
    let mut compiler = one_stylesheet();
    compiler
        .plugin(inliner(StyleInlineOptions::new()))
        .unwrap()
        .plugin(
            ScriptExtHtmlPlugin::new(ScriptAttributeOptions::new(ScriptAttribute::Async))
                .unwrap(),
        )
        .unwrap();

    let html = page(&compiler.compile().unwrap(), "index.html");
    assert!(html.contains("<style>"));
    assert!(html.contains(r#"src="index_bundle.js" async></script>"#));
}

#[test]
fn run_writes_output_without_inlined_stylesheet() {
    let out = TempDir::new().unwrap();
    let mut compiler = Compiler::new(
        CompilerOptions::new(fixture("one_stylesheet"))
            .output_dir(out.path().join("dist"))
            .filename("index_bundle.js")
            .css_filename("styles.css"),
    );
    compiler
        .chunk(ChunkSource::new("main").script("index.js").style("styles.css"))
        .page(HtmlPageOptions::new("index.html"));
    compiler.plugin(inliner(StyleInlineOptions::new())).unwrap();

    compiler.run().unwrap();

    let dist = out.path().join("dist");
    let html = std::fs::read_to_string(dist.join("index.html")).unwrap();
    assert!(html.contains("background: snow;"));
    assert!(dist.join("index_bundle.js").is_file());
    assert!(!dist.join("styles.css").exists());
}

#[test]
fn stylesheet_naming_itself_is_still_dropped() {
    let mut compilation = Compilation::new();
    compilation.emit_asset("styles.css", r#"a[href="styles.css"]{color:red}"#);
    compilation.add_chunk(Chunk::new("main").with_file("styles.css"));

    let mut compiler = Compiler::new(CompilerOptions::new("."));
    compiler
        .page(HtmlPageOptions::new("index.html"))
        .plugin(inliner(StyleInlineOptions::new()))
        .unwrap();

    let output = compiler.compile_from(compilation).unwrap();
    let html = page(&output, "index.html");

    assert!(!html.contains("<link"));
    assert!(html.contains(r#"<style>a[href="styles.css"]{color:red}</style>"#));
    assert!(output.asset("styles.css").is_none());
}
