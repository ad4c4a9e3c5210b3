use serde::{Deserialize, Serialize};
use stowage::feasibility::FeasibilityReport;
use stowage::io::ext_repr::{ExtLoadInstance, ExtPlan};

use crate::config::LoadPlanConfig;
use crate::render::RenderedLayout;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoadPlanOutput {
    #[serde(flatten)]
    pub instance: ExtLoadInstance,
    pub feasibility: FeasibilityReport,
    /// Absent when the cargo does not fit and rendering of infeasible loads is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<ExtPlan>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub render_warnings: Vec<ExtRenderWarning>,
    pub config: LoadPlanConfig,
}

/// Pallets that were accommodated by the plan but did not make it onto the drawing
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtRenderWarning {
    pub label: String,
    pub not_drawn: usize,
}

pub fn export_render_warnings(layout: &RenderedLayout) -> Vec<ExtRenderWarning> {
    layout
        .warnings
        .iter()
        .map(|w| ExtRenderWarning {
            label: w.label.clone(),
            not_drawn: w.not_drawn,
        })
        .collect()
}
