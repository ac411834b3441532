use plannergen_core::{ConfigFile, PlannerBuilder};
use tempfile::TempDir;

/// Helper function to create an output directory and a planner writing a
/// layout file into it first.
pub fn create_test_environment(layout: &str) -> (TempDir, plannergen_core::Planner) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join("layout.toml");
    std::fs::write(&layout_path, layout).expect("Failed to write layout file");

    let config = ConfigFile::load(&layout_path).expect("Failed to load layout file");
    let device = config
        .device()
        .expect("Failed to resolve device")
        .unwrap_or_default();
    let planner = PlannerBuilder::new(2024)
        .with_device(device)
        .with_config(config)
        .build()
        .expect("Failed to create planner");
    (temp_dir, planner)
}
