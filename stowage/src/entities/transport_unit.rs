use crate::Result;
use crate::entities::ensure_positive;

/// The cargo space of a truck, trailer or container: an empty box with a payload limit.
/// Immutable once constructed.
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct TransportUnit {
    length: f32,
    width: f32,
    height: f32,
    max_weight: f32,
}

impl TransportUnit {
    pub fn try_new(length: f32, width: f32, height: f32, max_weight: f32) -> Result<Self> {
        Ok(TransportUnit {
            length: ensure_positive("transport unit", "length", length)?,
            width: ensure_positive("transport unit", "width", width)?,
            height: ensure_positive("transport unit", "height", height)?,
            max_weight: ensure_positive("transport unit", "max weight", max_weight)?,
        })
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Maximum payload weight
    pub fn max_weight(&self) -> f32 {
        self.max_weight
    }

    pub fn volume(&self) -> f32 {
        self.length * self.width * self.height
    }

    /// Floor area, the 2D bounds used when drawing a layout
    pub fn footprint(&self) -> (f32, f32) {
        (self.length, self.width)
    }
}
