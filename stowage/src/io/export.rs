use crate::entities::LoadInstance;
use crate::io::ext_repr::{
    ExtLoadInstance, ExtPalletType, ExtPlacementRecord, ExtPlan, ExtTransportUnit,
};
use crate::planning::Plan;

pub fn export_instance(instance: &LoadInstance, name: Option<String>) -> ExtLoadInstance {
    let unit = &instance.unit;
    ExtLoadInstance {
        name,
        unit: ExtTransportUnit {
            length: unit.length(),
            width: unit.width(),
            height: unit.height(),
            max_weight: unit.max_weight(),
        },
        pallets: instance
            .cargo
            .pallet_types()
            .iter()
            .map(|pt| ExtPalletType {
                label: pt.label().to_string(),
                length: pt.length(),
                width: pt.width(),
                height: pt.height(),
                weight: pt.weight(),
                stackable: pt.stackable(),
                stack_count: pt.stack_count(),
                quantity: pt.quantity(),
            })
            .collect(),
    }
}

pub fn export_plan(plan: &Plan) -> ExtPlan {
    ExtPlan {
        records: plan
            .records
            .iter()
            .map(|r| ExtPlacementRecord {
                label: r.label.clone(),
                dimensions: [r.length, r.width, r.height],
                weight: r.weight,
                stackable: r.stackable,
                stack_count: r.stack_count,
                accommodated: r.accommodated_count,
                overflow: r.overflow_count,
            })
            .collect(),
        total_accommodated: plan.total_accommodated(),
        total_overflow: plan.total_overflow(),
    }
}
