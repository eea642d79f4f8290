use std::io::{self, IsTerminal};

use slothtest_core::api::{DisplayConfig, Picker, Renderer};

use crate::pick::RngPicker;
use crate::render::{EmojiRenderer, PlainRenderer};

/// Expects a resolved display config (`nofun` already applied).
pub fn build_renderer(display: &DisplayConfig) -> Box<dyn Renderer> {
    if display.emojis {
        tracing::debug!(target: "slothtest.render", renderer = "emoji", "renderer selected");
        Box::new(
            EmojiRenderer::new(io::stdout(), build_picker()).with_color(color_enabled()),
        )
    } else {
        tracing::debug!(target: "slothtest.render", renderer = "plain", "renderer selected");
        Box::new(PlainRenderer::new(io::stdout()))
    }
}

pub fn build_picker() -> Box<dyn Picker> {
    Box::new(RngPicker::from_entropy())
}

fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}
