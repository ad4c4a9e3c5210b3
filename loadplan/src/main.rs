use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use loadplan::config::LoadPlanConfig;
use loadplan::io;
use loadplan::io::cli::Cli;
use loadplan::io::intake::Intake;
use loadplan::io::output::{LoadPlanOutput, export_render_warnings};
use loadplan::io::report;
use loadplan::render::{LayoutRenderer, layout_to_svg};
use log::{info, warn};
use stowage::entities::LoadInstance;
use stowage::feasibility::FeasibilityReport;
use stowage::io::ext_repr::ExtLoadInstance;
use stowage::io::{export_instance, export_plan, import_instance};
use stowage::planning::plan_placement;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            LoadPlanConfig::default()
        }
        Some(config_file) => {
            io::read_json(&config_file).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed LoadPlanConfig: {config:?}");

    let (ext_instance, instance, stem) = match &args.input_file {
        Some(input_file) => {
            let ext_instance: ExtLoadInstance = io::read_json(input_file)?;
            let instance = import_instance(&ext_instance)
                .with_context(|| format!("invalid load instance: {}", input_file.display()))?;
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("instance")
                .to_string();
            (ext_instance, instance, stem)
        }
        None => {
            let stdin = std::io::stdin();
            let instance = Intake::new(stdin.lock(), std::io::stdout()).read_instance()?;
            (export_instance(&instance, None), instance, "interactive".to_string())
        }
    };

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    main_plan(ext_instance, instance, config, &stem, &args.solution_folder)
}

fn main_plan(
    ext_instance: ExtLoadInstance,
    instance: LoadInstance,
    config: LoadPlanConfig,
    stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let LoadInstance { unit, cargo } = &instance;

    let feasibility = FeasibilityReport::check(unit, cargo);
    info!(
        "[MAIN] cargo of {} pallet types, fits by volume: {}, fits by weight: {}",
        cargo.len(),
        feasibility.fits_by_volume,
        feasibility.fits_by_weight
    );

    let plan = match feasibility.fits() || config.render_when_infeasible {
        true => Some(plan_placement(unit, cargo)),
        false => None,
    };

    {
        let mut stdout = BufWriter::new(std::io::stdout().lock());
        report::write_report(&mut stdout, &feasibility, plan.as_ref())?;
        stdout.flush()?;
    }

    let layout = plan.as_ref().map(|plan| {
        let (length, width) = unit.footprint();
        LayoutRenderer::new(&plan.records, length, width).render()
    });

    if let Some(layout) = &layout {
        info!(
            "[MAIN] rendered {} pallets, floor usage {:.1}%",
            layout.placed.len(),
            layout.floor_usage() * 100.0
        );
        if config.write_svg {
            let svg_path = output_folder.join(format!("sol_{stem}.svg"));
            let title = ext_instance.name.as_deref().unwrap_or(stem);
            let svg = layout_to_svg(layout, config.svg_draw_options, title);
            io::write_svg(&svg, &svg_path)?;
        }
    }

    if config.write_json {
        let output = LoadPlanOutput {
            instance: ext_instance,
            feasibility,
            plan: plan.as_ref().map(export_plan),
            render_warnings: layout
                .as_ref()
                .map(export_render_warnings)
                .unwrap_or_default(),
            config,
        };
        let solution_path = output_folder.join(format!("sol_{stem}.json"));
        io::write_json(&output, &solution_path)?;
    }

    Ok(())
}
