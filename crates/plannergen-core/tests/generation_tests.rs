mod common;

use common::create_test_environment;
use plannergen_core::{Device, GenerationReport, PlannerError, Section};

#[test]
fn test_complete_document_workflow() {
    let (temp_dir, planner) = create_test_environment("");
    let out = temp_dir.path().join("planner");

    let document = planner
        .generate_document(&Section::ALL)
        .expect("Failed to generate document");
    let written = document.write_to(&out).expect("Failed to write document");

    assert_eq!(written.len(), Section::ALL.len() + 1);
    for section in Section::ALL {
        let path = out.join(format!("{section}.tex"));
        assert!(path.exists(), "missing {}", path.display());
    }

    let root = std::fs::read_to_string(out.join("document.tex")).unwrap();
    assert!(root.starts_with("\\documentclass"));
    let inputs: Vec<&str> = root.lines().filter(|line| line.starts_with("\\input{")).collect();
    assert_eq!(
        inputs,
        vec![
            "\\input{title}",
            "\\input{annual}",
            "\\input{quarterlies}",
            "\\input{monthlies}",
            "\\input{weeklies}",
            "\\input{dailies}",
            "\\input{todo}",
            "\\input{notes}",
        ]
    );

    let report = GenerationReport::new(&planner, &document, &out);
    assert_eq!(report.sections.len(), 8);
    assert_eq!(report.total_pages, document.total_pages());
}

#[test]
fn test_every_link_has_a_target() {
    let (_temp_dir, planner) = create_test_environment("");
    let document = planner.generate_document(&Section::ALL).unwrap();
    let text: String = document
        .sections()
        .iter()
        .map(|output| output.text.as_str())
        .collect();

    let references = |prefix: &str| -> std::collections::BTreeSet<String> {
        text.match_indices(prefix)
            .map(|(at, _)| {
                let rest = &text[at + prefix.len()..];
                rest[..rest.find('}').unwrap()].to_string()
            })
            .collect()
    };

    let targets = references("\\hypertarget{");
    let links = references("\\hyperlink{");

    // Daily notes anchors are linked but have no page of their own.
    let dangling: Vec<&String> = links
        .difference(&targets)
        .filter(|link| !link.ends_with("-notes"))
        .collect();
    assert!(dangling.is_empty(), "dangling links: {dangling:?}");
}

#[test]
fn test_layout_file_overrides_geometry_and_device() {
    let (_temp_dir, planner) = create_test_environment(
        r#"
device = "supernote_a6x"

[paper]
width = "10cm"
height = "14cm"
"#,
    );

    assert_eq!(planner.device(), Device::SupernoteA6X);
    let document = planner.generate_document(&[Section::Title]).unwrap();
    assert!(document.root().contains("paperwidth=10cm, paperheight=14cm"));
}

#[test]
fn test_layout_file_with_unsupported_device_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let layout_path = temp_dir.path().join("layout.toml");
    std::fs::write(&layout_path, "device = \"remarkable2\"\n").unwrap();

    let config = plannergen_core::ConfigFile::load(&layout_path).unwrap();
    let device = config.device().unwrap().unwrap();
    let err = plannergen_core::PlannerBuilder::new(2024)
        .with_device(device)
        .with_config(config)
        .build()
        .unwrap_err();

    assert!(err.is_device_error());
    assert!(matches!(err, PlannerError::UnsupportedDevice { .. }));
}

#[test]
fn test_unknown_device_name_in_layout_file() {
    let config = plannergen_core::ConfigFile::from_toml_str("device = \"kindle\"\n").unwrap();
    let err = config.device().unwrap_err();
    assert_eq!(err.to_string(), "Unknown device type 'kindle'");
}
