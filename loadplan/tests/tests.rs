#[cfg(test)]
mod tests {
    use std::path::Path;

    use loadplan::config::LoadPlanConfig;
    use loadplan::io;
    use loadplan::io::output::{LoadPlanOutput, export_render_warnings};
    use loadplan::io::report;
    use loadplan::render::svg_util::SvgLayoutTheme;
    use loadplan::render::{LayoutRenderer, layout_to_svg};
    use stowage::feasibility::FeasibilityReport;
    use stowage::io::ext_repr::ExtLoadInstance;
    use stowage::io::{export_plan, import_instance};
    use stowage::planning::plan_placement;
    use test_case::test_case;

    fn init_logger() {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .try_init();
    }

    fn load(path: &str) -> ExtLoadInstance {
        io::read_json(Path::new(path)).unwrap()
    }

    #[test_case("assets/semi_trailer.json", true, true; "semi trailer")]
    #[test_case("assets/single_type.json", true, true; "single type at the weight limit")]
    #[test_case("assets/overweight.json", true, false; "overweight")]
    fn feasibility_of_asset(path: &str, by_volume: bool, by_weight: bool) {
        init_logger();
        let instance = import_instance(&load(path)).unwrap();
        let report = FeasibilityReport::check(&instance.unit, &instance.cargo);
        assert_eq!(report.fits_by_volume, by_volume);
        assert_eq!(report.fits_by_weight, by_weight);
    }

    #[test]
    fn renderer_and_planner_may_disagree() {
        init_logger();
        let instance = import_instance(&load("assets/semi_trailer.json")).unwrap();
        let plan = plan_placement(&instance.unit, &instance.cargo);
        let accommodated = plan
            .records
            .iter()
            .map(|r| r.accommodated_count)
            .collect::<Vec<_>>();
        assert_eq!(accommodated, vec![20, 6, 4]);
        assert!(!plan.has_overflow());

        let (length, width) = instance.unit.footprint();
        let layout = LayoutRenderer::new(&plan.records, length, width).render();

        // two rows of EUR pallets leave room for two IND pallets at the end of the second row
        assert_eq!(layout.drawn_counts, vec![20, 2, 4]);
        let warnings = export_render_warnings(&layout);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].label, "IND");
        assert_eq!(warnings[0].not_drawn, 4);
    }

    #[test]
    fn output_document_round_trips_through_json() {
        init_logger();
        let ext_instance = load("assets/single_type.json");
        let instance = import_instance(&ext_instance).unwrap();
        let feasibility = FeasibilityReport::check(&instance.unit, &instance.cargo);
        let plan = plan_placement(&instance.unit, &instance.cargo);
        let layout = LayoutRenderer::new(&plan.records, 10.0, 5.0).render();

        let output = LoadPlanOutput {
            instance: ext_instance.clone(),
            feasibility,
            plan: Some(export_plan(&plan)),
            render_warnings: export_render_warnings(&layout),
            config: LoadPlanConfig::default(),
        };
        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["unit"]["max_weight"], 1000.0);
        assert_eq!(json["plan"]["records"][0]["accommodated"], 20);
        assert_eq!(json["feasibility"]["fits_by_weight"], true);
        assert!(json.get("render_warnings").is_none());

        let parsed: LoadPlanOutput = serde_json::from_value(json).unwrap();
        assert_eq!(parsed.instance, ext_instance);
        assert_eq!(parsed.config, LoadPlanConfig::default());
    }

    #[test]
    fn config_file_overrides_defaults() {
        let config: LoadPlanConfig = io::read_json(Path::new("assets/config.json")).unwrap();
        assert!(config.render_when_infeasible);
        assert!(config.write_json);
        assert!(config.write_svg);
        assert_eq!(config.svg_draw_options.theme, SvgLayoutTheme::GRAY);

        let empty: LoadPlanConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LoadPlanConfig::default());
    }

    #[test]
    fn report_and_svg_for_infeasible_instance() {
        let instance = import_instance(&load("assets/overweight.json")).unwrap();
        let feasibility = FeasibilityReport::check(&instance.unit, &instance.cargo);

        let mut out = vec![];
        report::write_report(&mut out, &feasibility, None).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("does not fit"));
        assert!(text.contains("weight 1200.000 exceeds 1000.000"));
        assert!(!text.contains("Loading plan"));

        let plan = plan_placement(&instance.unit, &instance.cargo);
        let layout = LayoutRenderer::new(&plan.records, 10.0, 5.0).render();
        let svg = layout_to_svg(&layout, Default::default(), "overweight").to_string();
        assert_eq!(svg.matches("<rect").count(), 20 + 1 + 1);
    }
}
