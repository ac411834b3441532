//! Command handlers and their clap argument structures.
//!
//! Arguments are parsed by clap into CLI-only structures and converted into
//! the interface-agnostic [`Generate`] parameters of the core crate:
//!
//! ```text
//! User Input → GenerateArgs (clap) → Generate + ConfigFile → PlannerBuilder
//! ```
//!
//! The device is resolved in priority order: `--device`, then the `device`
//! key of the layout file, then the default device. The layout file is
//! `--layout-path` when given, otherwise `$XDG_CONFIG_HOME/plannergen/layout.toml`
//! when it exists.

use std::{
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use jiff::{civil::Weekday, Zoned};
use log::info;
use plannergen_core::{
    display::{Devices, Sections},
    document::ROOT_FILE,
    params::{parse_weekday, Generate, MainHand, Section},
    ConfigFile, Device, GenerationReport, PlannerBuilder,
};
use serde_json::json;

use crate::renderer::TerminalRenderer;

/// Generate the planner sources
///
/// Writes one `.tex` file per section and a root `document.tex` into the
/// output directory, optionally compiling it with `pdflatex`.
#[derive(Args)]
pub struct GenerateArgs {
    /// Calendar year; defaults to the current year
    #[arg(long)]
    pub year: Option<i32>,
    /// Weekday every week starts on (name, abbreviation, or 0-6 from Sunday)
    #[arg(long, default_value = "monday", value_parser = parse_weekday)]
    pub weekday: Weekday,
    /// Hand holding the stylus; mirrors the daily pages
    #[arg(long, value_enum, default_value_t = HandArg::Right)]
    pub hand: HandArg,
    /// Target device; see `plannergen devices`
    #[arg(long, value_parser = parse_device)]
    pub device: Option<Device>,
    /// Comma-separated sections to generate; all when omitted
    #[arg(long, value_delimiter = ',')]
    pub sections: Vec<String>,
    /// Layout file overriding the device geometry
    #[arg(long)]
    pub layout_path: Option<PathBuf>,
    /// Directory the sources are written to
    #[arg(long, default_value = "out")]
    pub out_dir: PathBuf,
    /// Draw the page geometry frames
    #[arg(long)]
    pub show_frames: bool,
    /// Draw borders around hyperlinks
    #[arg(long)]
    pub show_links: bool,
    /// Run pdflatex on the written sources
    #[arg(long)]
    pub compile: bool,
}

impl GenerateArgs {
    /// Converts the arguments into core parameters. `config_device` is the
    /// device named by the layout file, used when `--device` is absent.
    pub fn to_params(&self, config_device: Option<Device>) -> Result<Generate> {
        Ok(Generate {
            year: self
                .year
                .unwrap_or_else(|| i32::from(Zoned::now().year())),
            weekday: self.weekday,
            hand: self.hand.into(),
            device: self.device.or(config_device).unwrap_or_default(),
            sections: Section::parse_list(&self.sections)?,
            show_frames: self.show_frames,
            show_links: self.show_links,
        })
    }
}

fn parse_device(s: &str) -> plannergen_core::Result<Device> {
    s.parse()
}

/// Command-line representation of the stylus hand
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum HandArg {
    /// Schedule on the left, priorities on the right
    Right,
    /// Priorities on the left, schedule on the right
    Left,
}

impl From<HandArg> for MainHand {
    fn from(val: HandArg) -> Self {
        match val {
            HandArg::Right => MainHand::Right,
            HandArg::Left => MainHand::Left,
        }
    }
}

impl std::fmt::Display for HandArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(MainHand::from(*self).as_str())
    }
}

/// Command handlers sharing one output mode.
pub struct Cli {
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(renderer: TerminalRenderer, json: bool) -> Self {
        Self { renderer, json }
    }

    /// Generates the planner and reports what was written.
    pub fn generate(&self, args: &GenerateArgs) -> Result<()> {
        let config = load_config(args.layout_path.as_deref())?;
        let config_device = config
            .device()
            .context("Invalid device in layout file")?;
        let params = args.to_params(config_device)?;

        let planner = PlannerBuilder::from_params(&params)
            .with_config(config)
            .build()
            .context("Failed to initialize planner")?;
        let document = planner
            .generate_document(&params.sections)
            .context("Failed to generate planner")?;
        document
            .write_to(&args.out_dir)
            .context("Failed to write planner sources")?;

        if args.compile {
            compile(&args.out_dir)?;
        }

        let report = GenerationReport::new(&planner, &document, &args.out_dir);
        if self.json {
            println!("{}", report.to_json()?);
            Ok(())
        } else {
            self.renderer.render(&report.to_string())
        }
    }

    pub fn list_devices(&self) -> Result<()> {
        if self.json {
            let devices: Vec<_> = Device::ALL
                .iter()
                .map(|device| json!({ "name": device.as_str(), "description": device.description() }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&devices)?);
            return Ok(());
        }
        self.renderer.render(&Devices(Device::ALL.to_vec()).to_string())
    }

    pub fn list_sections(&self) -> Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&Section::ALL)?);
            return Ok(());
        }
        self.renderer.render(&Sections(Section::ALL.to_vec()).to_string())
    }
}

/// Loads the explicit layout file, else the XDG one if present, else
/// nothing.
fn load_config(explicit: Option<&Path>) -> Result<ConfigFile> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => xdg::BaseDirectories::with_prefix("plannergen").find_config_file("layout.toml"),
    };

    match path {
        Some(path) => {
            info!("using layout file {}", path.display());
            ConfigFile::load(&path)
                .with_context(|| format!("Failed to load layout file {}", path.display()))
        }
        None => Ok(ConfigFile::default()),
    }
}

fn compile(dir: &Path) -> Result<()> {
    info!("compiling {} in {}", ROOT_FILE, dir.display());

    let status = Command::new("pdflatex")
        .args(["-interaction=nonstopmode", ROOT_FILE])
        .current_dir(dir)
        .stdout(Stdio::null())
        .status()
        .context("Failed to start pdflatex")?;

    if !status.success() {
        bail!("pdflatex failed with {status}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::args::{Args, Commands};

    fn generate_args(argv: &[&str]) -> GenerateArgs {
        let mut full = vec!["plannergen", "generate"];
        full.extend_from_slice(argv);
        match Args::parse_from(full).command {
            Commands::Generate(args) => args,
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_defaults() {
        let params = generate_args(&["--year", "2024"]).to_params(None).unwrap();

        assert_eq!(params.year, 2024);
        assert_eq!(params.weekday, Weekday::Monday);
        assert_eq!(params.hand, MainHand::Right);
        assert_eq!(params.device, Device::SupernoteA5X);
        assert_eq!(params.sections, Section::ALL.to_vec());
    }

    #[test]
    fn test_device_flag_wins_over_layout_file() {
        let args = generate_args(&["--device", "supernote_a6x"]);
        assert_eq!(
            args.to_params(Some(Device::ReMarkable2)).unwrap().device,
            Device::SupernoteA6X
        );

        let args = generate_args(&[]);
        assert_eq!(
            args.to_params(Some(Device::ReMarkable2)).unwrap().device,
            Device::ReMarkable2
        );
    }

    #[test]
    fn test_weekday_hand_and_sections() {
        let params = generate_args(&[
            "--weekday",
            "0",
            "--hand",
            "left",
            "--sections",
            "notes,title",
        ])
        .to_params(None)
        .unwrap();

        assert_eq!(params.weekday, Weekday::Sunday);
        assert_eq!(params.hand, MainHand::Left);
        assert_eq!(params.sections, vec![Section::Title, Section::Notes]);
    }

    #[test]
    fn test_unknown_section_is_rejected() {
        let err = generate_args(&["--sections", "calendar"])
            .to_params(None)
            .unwrap_err();
        assert!(err.to_string().contains("unknown section: calendar"));
    }

    #[test]
    fn test_rejects_unknown_device_while_parsing() {
        let result = Args::try_parse_from(["plannergen", "generate", "--device", "kindle"]);
        assert!(result.is_err());
    }
}
