#[cfg(test)]
mod tests {
    use stowage::StowageError;
    use stowage::entities::{Cargo, TransportUnit};
    use stowage::feasibility::{Constraint, FeasibilityReport, fits_by_volume, fits_by_weight};
    use stowage::io::ext_repr::ExtLoadInstance;
    use stowage::io::{export_instance, export_plan, import_instance};
    use stowage::planning::plan_placement;
    use test_case::test_case;

    fn single_type(
        unit: (f32, f32, f32, f32),
        label: &str,
        dims: (f32, f32, f32),
        weight: f32,
        quantity: usize,
    ) -> (TransportUnit, Cargo) {
        let unit = TransportUnit::try_new(unit.0, unit.1, unit.2, unit.3).unwrap();
        let mut cargo = Cargo::new();
        cargo
            .add_pallet_type(label, dims.0, dims.1, dims.2, weight, false, quantity, 1)
            .unwrap();
        (unit, cargo)
    }

    #[test]
    fn scenario_everything_fits_at_the_weight_limit() {
        let (unit, cargo) = single_type((10.0, 5.0, 3.0, 1000.0), "A", (2.0, 1.0, 1.0), 50.0, 20);

        assert_eq!(cargo.total_volume(), 40.0);
        assert_eq!(unit.volume(), 150.0);
        assert_eq!(cargo.total_weight(), 1000.0);
        assert!(fits_by_volume(&unit, &cargo));
        assert!(fits_by_weight(&unit, &cargo));

        let plan = plan_placement(&unit, &cargo);
        assert_eq!(plan.records.len(), 1);
        assert_eq!(plan.records[0].label, "A");
        assert_eq!(plan.records[0].accommodated_count, 20);
        assert_eq!(plan.records[0].overflow_count, 0);
    }

    #[test]
    fn scenario_too_heavy_but_small_enough() {
        let (unit, cargo) = single_type((10.0, 5.0, 3.0, 1000.0), "B", (2.0, 1.0, 1.0), 60.0, 20);

        assert_eq!(cargo.total_weight(), 1200.0);
        assert!(fits_by_volume(&unit, &cargo));
        assert!(!fits_by_weight(&unit, &cargo));
        assert_eq!(
            FeasibilityReport::check(&unit, &cargo).violations(),
            vec![Constraint::Weight]
        );
    }

    #[test]
    fn scenario_pallet_longer_than_unit() {
        let (unit, cargo) = single_type((4.0, 4.0, 4.0, 500.0), "C", (5.0, 1.0, 1.0), 10.0, 3);

        let plan = plan_placement(&unit, &cargo);
        assert_eq!(plan.records[0].accommodated_count, 0);
        assert_eq!(plan.records[0].overflow_count, 3);
        assert!(plan.has_overflow());
    }

    #[test_case((12.0, 2.5, 2.75), (1.25, 0.75, 1.25), 100; "partially fits")]
    #[test_case((12.0, 2.5, 2.75), (1.5, 1.0, 1.5), 10; "fully fits")]
    #[test_case((6.0, 2.5, 2.5), (0.75, 0.5, 0.625), 1000; "small crates")]
    #[test_case((6.0, 2.5, 2.5), (3.5, 1.25, 1.25), 3; "single row")]
    #[test_case((6.0, 2.5, 2.5), (2.0, 2.0, 2.75), 7; "too high")]
    #[test_case((6.0, 2.5, 2.5), (1.0, 1.0, 1.0), 0; "no quantity")]
    fn accommodated_follows_grid_division(unit: (f32, f32, f32), dims: (f32, f32, f32), quantity: usize) {
        let (unit, cargo) = single_type((unit.0, unit.1, unit.2, 30000.0), "P", dims, 10.0, quantity);
        let record = &plan_placement(&unit, &cargo).records[0];

        let grid = (unit.length() / dims.0).floor() as usize
            * (unit.width() / dims.1).floor() as usize
            * (unit.height() / dims.2).floor() as usize;

        assert_eq!(record.accommodated_count, usize::min(quantity, grid));
        assert_eq!(record.accommodated_count + record.overflow_count, quantity);
    }

    #[test_case((5.0, 1.0, 1.0); "longer")]
    #[test_case((1.0, 5.0, 1.0); "wider")]
    #[test_case((1.0, 1.0, 5.0); "higher")]
    fn any_oversized_axis_overflows_everything(dims: (f32, f32, f32)) {
        for quantity in [1, 10, 1000] {
            let (unit, cargo) = single_type((4.0, 4.0, 4.0, 500.0), "X", dims, 1.0, quantity);
            let record = &plan_placement(&unit, &cargo).records[0];
            assert_eq!(record.accommodated_count, 0);
            assert_eq!(record.overflow_count, quantity);
        }
    }

    #[test]
    fn planning_is_idempotent() {
        let (unit, cargo) = single_type((10.0, 5.0, 3.0, 1000.0), "A", (2.0, 1.0, 1.0), 50.0, 90);
        assert_eq!(plan_placement(&unit, &cargo), plan_placement(&unit, &cargo));
        assert_eq!(
            FeasibilityReport::check(&unit, &cargo),
            FeasibilityReport::check(&unit, &cargo)
        );
    }

    #[test]
    fn import_json_instance() {
        let json = r#"{
            "name": "mixed load",
            "unit": { "length": 13.6, "width": 2.45, "height": 2.7, "max_weight": 24000 },
            "pallets": [
                { "label": "EUR", "length": 1.2, "width": 0.8, "height": 1.2, "weight": 400, "stackable": true, "stack_count": 2, "quantity": 20 },
                { "label": "IND", "length": 1.2, "width": 1.0, "height": 1.6, "weight": 600, "quantity": 6 }
            ]
        }"#;
        let ext_instance: ExtLoadInstance = serde_json::from_str(json).unwrap();
        let instance = import_instance(&ext_instance).unwrap();

        assert_eq!(instance.cargo.len(), 2);
        assert_eq!(instance.cargo.pallet_types()[0].stack_count(), 2);
        assert!(!instance.cargo.pallet_types()[1].stackable());
        assert_eq!(instance.cargo.pallet_types()[1].stack_count(), 1);
        assert_eq!(
            export_instance(&instance, ext_instance.name.clone()),
            ext_instance
        );

        let ext_plan = export_plan(&plan_placement(&instance.unit, &instance.cargo));
        assert_eq!(ext_plan.records[0].accommodated, 20);
        // 11 x 2 x 1 grid
        assert_eq!(ext_plan.records[1].accommodated, 6);
        assert_eq!(ext_plan.total_overflow, 0);
    }

    #[test]
    fn import_rejects_inconsistent_stacking() {
        let json = r#"{
            "unit": { "length": 10, "width": 5, "height": 3, "max_weight": 1000 },
            "pallets": [
                { "label": "A", "length": 1, "width": 1, "height": 1, "weight": 1, "stackable": false, "stack_count": 4, "quantity": 1 }
            ]
        }"#;
        let ext_instance: ExtLoadInstance = serde_json::from_str(json).unwrap();
        assert!(matches!(
            import_instance(&ext_instance),
            Err(StowageError::InvalidStackConfiguration { .. })
        ));
    }
}
