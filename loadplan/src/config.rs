use serde::{Deserialize, Serialize};

use crate::render::svg_util::SvgDrawOptions;

/// Configuration for the load planner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LoadPlanConfig {
    /// Draw the layout even when the cargo does not fit by volume or weight
    #[serde(default)]
    pub render_when_infeasible: bool,
    /// Write the instance, feasibility report and plan as JSON
    #[serde(default = "enabled")]
    pub write_json: bool,
    /// Write the rendered layout as SVG
    #[serde(default = "enabled")]
    pub write_svg: bool,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

fn enabled() -> bool {
    true
}

impl Default for LoadPlanConfig {
    fn default() -> Self {
        Self {
            render_when_infeasible: false,
            write_json: true,
            write_svg: true,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
