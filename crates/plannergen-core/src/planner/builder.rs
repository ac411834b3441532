//! Builder for creating and configuring Planner instances.

use jiff::civil::Weekday;
use log::info;

use super::{ui::MosUi, Planner};
use crate::{
    calendar::Year,
    config::ConfigFile,
    devices::Device,
    error::Result,
    params::{Generate, MainHand},
    tex::snippets::PreambleOptions,
};

/// Builder for creating and configuring Planner instances.
#[derive(Debug, Clone)]
pub struct PlannerBuilder {
    year: i32,
    weekday: Weekday,
    hand: MainHand,
    device: Device,
    config: ConfigFile,
    options: PreambleOptions,
}

impl PlannerBuilder {
    /// Creates a builder for `year` with default settings: weeks start on
    /// Monday, right hand, Supernote A5X, no layout overrides.
    pub fn new(year: i32) -> Self {
        Self {
            year,
            weekday: Weekday::Monday,
            hand: MainHand::Right,
            device: Device::SupernoteA5X,
            config: ConfigFile::default(),
            options: PreambleOptions::default(),
        }
    }

    /// Seeds a builder from interface-agnostic generation parameters.
    pub fn from_params(params: &Generate) -> Self {
        Self::new(params.year)
            .with_weekday(params.weekday)
            .with_hand(params.hand)
            .with_device(params.device)
            .with_frames(params.show_frames)
            .with_links(params.show_links)
    }

    pub fn with_weekday(mut self, weekday: Weekday) -> Self {
        self.weekday = weekday;
        self
    }

    pub fn with_hand(mut self, hand: MainHand) -> Self {
        self.hand = hand;
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Applies a parsed layout file.
    ///
    /// The file's layout tables and `[ui]` overrides always apply. Its
    /// `device` key is resolved by the caller, which knows whether a device
    /// was given explicitly.
    pub fn with_config(mut self, config: ConfigFile) -> Self {
        self.config = config;
        self
    }

    /// Draws the page geometry frames.
    pub fn with_frames(mut self, show_frames: bool) -> Self {
        self.options.show_frames = show_frames;
        self
    }

    /// Draws borders around hyperlinks.
    pub fn with_links(mut self, show_links: bool) -> Self {
        self.options.show_links = show_links;
        self
    }

    /// Builds the configured planner instance.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::UnsupportedDevice` if the header template has no
    /// constants for the device.
    pub fn build(self) -> Result<Planner> {
        let ui = MosUi::for_device(self.device)?.with_overrides(&self.config.ui);
        let layout = self.config.resolve_layout(self.device);
        let year = Year::new(self.year, self.weekday);

        info!(
            "planner for {} on {} (paper {} x {})",
            year, self.device, layout.paper.width, layout.paper.height
        );

        Ok(Planner {
            year,
            hand: self.hand,
            device: self.device,
            layout,
            ui,
            options: self.options,
        })
    }
}

impl Default for PlannerBuilder {
    fn default() -> Self {
        Self::new(Generate::default().year)
    }
}
