use std::cmp::Ordering;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of floats with a certain tolerance.
///Two FPAs are considered equal if they are within a certain tolerance of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f32);

impl FPA {
    /// Number of whole times `divisor` fits into `self`.
    /// A quotient within a few ulps of an integer counts as that integer,
    /// so `0.3 / 0.1` yields 3 instead of 2. The snap is relative only, so any
    /// real shortfall (e.g. `2.999995 / 1.0`) still floors.
    pub fn whole_quotient(self, divisor: f32) -> usize {
        let quotient = self.0 / divisor;
        if !quotient.is_finite() || quotient <= 0.0 {
            return 0;
        }
        let rounded = quotient.round();
        match float_cmp::approx_eq!(f32, quotient, rounded, epsilon = 0.0, ulps = 4) {
            true => rounded as usize,
            false => quotient.floor() as usize,
        }
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f32, self.0, other.0, epsilon = 1e-5, ulps = 4)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}
