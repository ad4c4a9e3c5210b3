use crate::entities::{PalletType, TransportUnit};
use crate::util::FPA;

/// Number of pallets that tile the unit along each of its three axes,
/// ignoring everything else that is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AxisFit {
    pub along_length: usize,
    pub along_width: usize,
    pub along_height: usize,
}

impl AxisFit {
    /// Maximum number of pallets of this exact footprint and height that fit in the unit,
    /// saturating at `usize::MAX`
    pub fn capacity(&self) -> usize {
        self.along_length
            .saturating_mul(self.along_width)
            .saturating_mul(self.along_height)
    }
}

/// Axis-aligned grid division of `unit` by a single pallet of `pallet_type`.
/// Pallets are never rotated, and the height axis uses the height of one pallet.
pub fn axis_fit(unit: &TransportUnit, pallet_type: &PalletType) -> AxisFit {
    AxisFit {
        along_length: FPA(unit.length()).whole_quotient(pallet_type.length()),
        along_width: FPA(unit.width()).whole_quotient(pallet_type.width()),
        along_height: FPA(unit.height()).whole_quotient(pallet_type.height()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case((10.0, 5.0, 3.0), (2.0, 1.0, 1.0), (5, 5, 3); "evenly divisible")]
    #[test_case((4.0, 4.0, 4.0), (5.0, 1.0, 1.0), (0, 4, 4); "too long for the unit")]
    #[test_case((13.6, 2.45, 2.7), (1.2, 0.8, 1.4), (11, 3, 1); "euro pallets in a semi trailer")]
    fn grid_division(unit: (f32, f32, f32), pallet: (f32, f32, f32), expected: (usize, usize, usize)) {
        let unit = TransportUnit::try_new(unit.0, unit.1, unit.2, 1000.0).unwrap();
        let pt = PalletType::try_new("P", pallet.0, pallet.1, pallet.2, 1.0, 1).unwrap();
        let fit = axis_fit(&unit, &pt);
        assert_eq!(
            (fit.along_length, fit.along_width, fit.along_height),
            expected
        );
        assert_eq!(fit.capacity(), expected.0 * expected.1 * expected.2);
    }

    #[test]
    fn stacking_does_not_change_the_grid() {
        let unit = TransportUnit::try_new(10.0, 5.0, 3.0, 1000.0).unwrap();
        let single = PalletType::try_new("P", 2.0, 1.0, 1.0, 1.0, 1).unwrap();
        let stacked = single.clone().with_stacking(3).unwrap();
        assert_eq!(axis_fit(&unit, &single), axis_fit(&unit, &stacked));
    }

    #[test]
    fn capacity_saturates_instead_of_overflowing() {
        let unit = TransportUnit::try_new(1e7, 1e7, 1e7, 1e9).unwrap();
        let pt = PalletType::try_new("grain", 1e-3, 1e-3, 1e-3, 1.0, 5).unwrap();
        assert_eq!(axis_fit(&unit, &pt).capacity(), usize::MAX);
    }
}
