//! Plugins shipped with Tidewind.

use crate::api::{Declaration, PluginApi};
use crate::error::Result;
use crate::plugin::Plugin;

/// `aspect-auto`, `aspect-square`, `aspect-video`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AspectRatio;

impl Plugin for AspectRatio {
    fn name(&self) -> &str {
        "aspect-ratio"
    }

    fn register(&self, api: &mut PluginApi) -> Result<()> {
        for (class, ratio) in [
            ("aspect-auto", "auto"),
            ("aspect-square", "1 / 1"),
            ("aspect-video", "16 / 9"),
        ] {
            api.add_utility(class, vec![Declaration::new("aspect-ratio", ratio)])?;
        }
        Ok(())
    }
}

/// Multi-line truncation: `line-clamp-1` through `line-clamp-6`, `line-clamp-none`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClamp;

impl LineClamp {
    const MAX_LINES: u8 = 6;
}

impl Plugin for LineClamp {
    fn name(&self) -> &str {
        "line-clamp"
    }

    fn register(&self, api: &mut PluginApi) -> Result<()> {
        for lines in 1..=Self::MAX_LINES {
            api.add_utility(
                format!("line-clamp-{lines}"),
                vec![
                    Declaration::new("overflow", "hidden"),
                    Declaration::new("display", "-webkit-box"),
                    Declaration::new("-webkit-box-orient", "vertical"),
                    Declaration::new("-webkit-line-clamp", lines.to_string()),
                ],
            )?;
        }
        api.add_utility(
            "line-clamp-none",
            vec![
                Declaration::new("overflow", "visible"),
                Declaration::new("display", "block"),
                Declaration::new("-webkit-box-orient", "horizontal"),
                Declaration::new("-webkit-line-clamp", "none"),
            ],
        )
    }
}

/// `aria-*` state variants, e.g. `aria-expanded:p-4`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AriaVariants;

impl Plugin for AriaVariants {
    fn name(&self) -> &str {
        "aria"
    }

    fn register(&self, api: &mut PluginApi) -> Result<()> {
        for state in ["busy", "checked", "disabled", "expanded", "hidden", "pressed", "selected"] {
            api.add_variant(
                format!("aria-{state}"),
                format!("&[aria-{state}=\"true\"]"),
            )?;
        }
        Ok(())
    }
}
