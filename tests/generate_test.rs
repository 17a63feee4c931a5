use clap::Parser;
use genproj::cli::Args;
use genproj::config::{resolve_root, ScanConfig};
use genproj::error::{Error, Result};
use genproj::{generate, run};
use genproj::model::ProjectModel;
use genproj::renderer::{render_filters, render_project, MiniJinjaRenderer, TemplateRenderer};
use genproj::writer::write_output;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, relative: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "").unwrap();
}

fn config(root: &Path, map_root: Option<&str>, property_sheets: &[&str]) -> ScanConfig {
    ScanConfig {
        root: resolve_root(root).unwrap(),
        patterns: vec!["*.cpp".to_string(), "*.h".to_string()],
        excludes: vec!["ignore".to_string()],
        map_root: map_root.map(str::to_string),
        name: "agame".to_string(),
        guid: "{6757D22F-2E69-4E79-BDC3-A7F8B8FC7471}".to_string(),
        property_sheets: property_sheets.iter().map(|s| s.to_string()).collect(),
        project_file: root.join("out/agame.vcxproj"),
        filter_file: root.join("out/agame.vcxproj.filters"),
    }
}

fn sample_tree() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "src/a.cpp");
    touch(temp_dir.path(), "src/lib/b.h");
    touch(temp_dir.path(), "ignore/c.cpp");
    temp_dir
}

#[test_log::test]
fn test_generate_project() {
    let temp_dir = sample_tree();
    let config = config(temp_dir.path(), None, &["common.props"]);

    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    let project = &generated.project;
    assert!(project.contains("<ProjectGuid>{6757D22F-2E69-4E79-BDC3-A7F8B8FC7471}</ProjectGuid>"));
    assert!(project.contains("<RootNamespace>agame</RootNamespace>"));
    assert!(project.contains(
        "  <ImportGroup Label=\"PropertySheets\">\n    <Import Project=\"common.props\" />\n  </ImportGroup>\n"
    ));
    assert!(project.contains(
        "  <ItemGroup>\n    <ClCompile Include=\"src\\a.cpp\" />\n    <ClCompile Include=\"src\\lib\\b.h\" />\n  </ItemGroup>\n"
    ));
    assert!(!project.contains("c.cpp"));

    let filters = &generated.filters;
    assert!(filters.contains("    <Filter Include=\"src\">\n    </Filter>\n"));
    assert!(filters.contains("    <Filter Include=\"src\\lib\">\n    </Filter>\n"));
    assert!(filters.contains(
        "    <ClCompile Include=\"src\\lib\\b.h\">\n      <Filter>src\\lib</Filter>\n    </ClCompile>\n"
    ));
    assert!(!filters.contains("{%"));
}

#[test]
fn test_generate_with_remap() {
    let temp_dir = sample_tree();
    let config = config(temp_dir.path(), Some("X"), &[]);

    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    assert!(generated.project.contains("<ClCompile Include=\"X\\src\\a.cpp\" />"));
    assert!(generated.filters.contains("<Filter Include=\"X\">"));
    assert!(generated.filters.contains("<Filter Include=\"X\\src\">"));
    assert!(generated.filters.contains("<Filter Include=\"X\\src\\lib\">"));
    assert!(generated.filters.contains("<Filter>X\\src</Filter>"));
}

#[test]
fn test_no_property_sheets() {
    let temp_dir = sample_tree();
    let config = config(temp_dir.path(), None, &[]);

    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    assert!(!generated.project.contains("<ImportGroup Label=\"PropertySheets\">"));
    assert_eq!(
        generated.project.matches("<ImportGroup Label=\"PropertySheets\" Condition=").count(),
        4
    );
}

#[test]
fn test_root_level_file_without_filter() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "main.cpp");
    let config = config(temp_dir.path(), None, &[]);

    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    assert!(generated.filters.contains("    <ClCompile Include=\"main.cpp\" />\n"));
    assert!(!generated.filters.contains("<Filter Include="));
}

#[test]
fn test_empty_tree_renders_scaffolding() {
    let temp_dir = TempDir::new().unwrap();
    let config = config(temp_dir.path(), None, &[]);

    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    assert!(generated.model.files.is_empty());
    assert!(generated.model.filters.is_empty());
    assert!(!generated.project.contains("<ClCompile Include="));
    assert_eq!(generated.filters.matches("  <ItemGroup>\n  </ItemGroup>\n").count(), 2);
    assert!(generated.filters.ends_with("</Project>\n"));
}

#[test]
fn test_generation_is_deterministic() {
    let temp_dir = sample_tree();
    touch(temp_dir.path(), "src/z/deep/d.cpp");
    touch(temp_dir.path(), "include/e.h");
    let config = config(temp_dir.path(), Some("..\\game"), &["a.props", "b.props"]);
    let engine = MiniJinjaRenderer::new();

    let first = generate(&config, &engine).unwrap();
    let second = generate(&config, &engine).unwrap();

    assert_eq!(first.project, second.project);
    assert_eq!(first.filters, second.filters);
}

#[test]
fn test_xml_special_characters_are_escaped() {
    let temp_dir = TempDir::new().unwrap();
    touch(temp_dir.path(), "R&D/a.cpp");
    let config = config(temp_dir.path(), None, &[]);

    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    assert!(generated.project.contains("<ClCompile Include=\"R&amp;D\\a.cpp\" />"));
    assert!(generated.filters.contains("<Filter Include=\"R&amp;D\">"));
}

#[test]
fn test_write_output_overwrites() {
    let temp_dir = sample_tree();
    let config = config(temp_dir.path(), None, &[]);
    let generated = generate(&config, &MiniJinjaRenderer::new()).unwrap();

    write_output(&config.project_file, "stale").unwrap();
    write_output(&config.project_file, &generated.project).unwrap();
    write_output(&config.filter_file, &generated.filters).unwrap();

    assert_eq!(fs::read_to_string(&config.project_file).unwrap(), generated.project);
    assert_eq!(fs::read_to_string(&config.filter_file).unwrap(), generated.filters);
}

fn run_args(root: &Path, out: &Path, extra: &[&str]) -> Args {
    let root = root.to_str().unwrap().to_string();
    let project_file = out.join("agame.vcxproj").to_str().unwrap().to_string();
    let filter_file = out.join("agame.vcxproj.filters").to_str().unwrap().to_string();
    let mut argv = vec![
        "genproj".to_string(),
        "--root".to_string(),
        root,
        "--project-file".to_string(),
        project_file,
        "--filter-file".to_string(),
        filter_file,
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    Args::try_parse_from(argv).unwrap()
}

fn assert_no_output(out: &Path) {
    assert!(!out.join("agame.vcxproj").exists());
    assert!(!out.join("agame.vcxproj.filters").exists());
}

#[test]
fn test_run_writes_both_files() {
    let temp_dir = sample_tree();
    let out_dir = TempDir::new().unwrap();

    let generated =
        run(run_args(temp_dir.path(), out_dir.path(), &[]), &MiniJinjaRenderer::new()).unwrap();

    let project = fs::read_to_string(out_dir.path().join("agame.vcxproj")).unwrap();
    let filters = fs::read_to_string(out_dir.path().join("agame.vcxproj.filters")).unwrap();
    assert_eq!(project, generated.project);
    assert_eq!(filters, generated.filters);
}

#[test]
fn test_run_with_missing_root_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing");

    let err = run(run_args(&missing, out_dir.path(), &[]), &MiniJinjaRenderer::new()).unwrap_err();

    assert!(matches!(err, Error::RootNotFound { .. }));
    assert_no_output(out_dir.path());
}

#[test]
fn test_run_with_file_root_writes_nothing() {
    let temp_dir = sample_tree();
    let out_dir = TempDir::new().unwrap();
    let file_root = temp_dir.path().join("src/a.cpp");

    let err =
        run(run_args(&file_root, out_dir.path(), &[]), &MiniJinjaRenderer::new()).unwrap_err();

    assert!(matches!(err, Error::RootNotADirectory { .. }));
    assert_no_output(out_dir.path());
}

#[test]
fn test_run_with_invalid_pattern_writes_nothing() {
    let temp_dir = sample_tree();
    let out_dir = TempDir::new().unwrap();
    let args = run_args(temp_dir.path(), out_dir.path(), &["--patterns", "*.cpp,["]);

    let err = run(args, &MiniJinjaRenderer::new()).unwrap_err();

    assert!(matches!(err, Error::InvalidPattern { .. }));
    assert_no_output(out_dir.path());
}

struct FailingRenderer;

impl TemplateRenderer for FailingRenderer {
    fn render(&self, _template: &str, _context: &serde_json::Value) -> Result<String> {
        Err(Error::ConfigError("rendering failed".to_string()))
    }
}

#[test]
fn test_run_with_render_error_writes_nothing() {
    let temp_dir = sample_tree();
    let out_dir = TempDir::new().unwrap();

    let err = run(run_args(temp_dir.path(), out_dir.path(), &[]), &FailingRenderer).unwrap_err();

    assert!(matches!(err, Error::ConfigError(_)));
    assert_no_output(out_dir.path());
}

/// Renders the context as JSON so the model can be inspected without templates.
struct JsonRenderer;

impl TemplateRenderer for JsonRenderer {
    fn render(&self, _template: &str, context: &serde_json::Value) -> Result<String> {
        Ok(context.to_string())
    }
}

#[test]
fn test_renderer_receives_final_model() {
    let temp_dir = sample_tree();
    let config = config(temp_dir.path(), Some("X"), &["common.props"]);
    let generated = generate(&config, &JsonRenderer).unwrap();
    let model: &ProjectModel = &generated.model;

    let rendered = render_project(&JsonRenderer, model).unwrap();
    let context: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(context["name"], "agame");
    assert_eq!(context["files"][0]["path"], "X\\src\\a.cpp");
    assert_eq!(context["files"][0]["filter"], "X\\src");
    assert_eq!(context["filters"], serde_json::json!(["X", "X\\src", "X\\src\\lib"]));
    assert_eq!(context["property_sheets"], serde_json::json!(["common.props"]));
    assert_eq!(render_filters(&JsonRenderer, model).unwrap(), generated.filters);
}
