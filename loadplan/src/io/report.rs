use std::io::Write;

use anyhow::Result;
use itertools::Itertools;
use stowage::feasibility::{Constraint, FeasibilityReport};
use stowage::planning::{PlacementRecord, Plan};

pub fn feasibility_summary(report: &FeasibilityReport) -> String {
    if report.fits() {
        return "The cargo fits in the transport unit.".to_string();
    }
    let reasons = report
        .violations()
        .into_iter()
        .map(|c| match c {
            Constraint::Volume => format!(
                "volume {:.3} exceeds {:.3}",
                report.volume_demand, report.volume_capacity
            ),
            Constraint::Weight => format!(
                "weight {:.3} exceeds {:.3}",
                report.weight_demand, report.weight_capacity
            ),
        })
        .join(", ");
    format!("The cargo does not fit in the transport unit ({reasons}).")
}

pub fn record_line(record: &PlacementRecord) -> String {
    format!(
        "Type: {}, Dimensions: {}x{}x{}, Weight: {} kg, Stackable: {}, Stack count: {}, Accommodated: {}, Not accommodated: {}",
        record.label,
        record.length,
        record.width,
        record.height,
        record.weight,
        record.stackable,
        record.stack_count,
        record.accommodated_count,
        record.overflow_count
    )
}

/// Writes the go/no-go verdict followed by the plan, if any.
pub fn write_report(
    out: &mut impl Write,
    report: &FeasibilityReport,
    plan: Option<&Plan>,
) -> Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", feasibility_summary(report))?;
    writeln!(
        out,
        "Volume usage: {:.1}%, weight usage: {:.1}%, floor coverage: {:.1}%",
        report.volume_utilization() * 100.0,
        report.weight_utilization() * 100.0,
        report.floor_coverage() * 100.0
    )?;
    if let Some(plan) = plan {
        writeln!(out)?;
        writeln!(out, "Loading plan:")?;
        for record in &plan.records {
            writeln!(out, "{}", record_line(record))?;
        }
        if plan.has_overflow() {
            writeln!(
                out,
                "{} stacking units could not be accommodated",
                plan.total_overflow()
            )?;
        }
    }
    Ok(())
}
