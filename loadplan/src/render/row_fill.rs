use log::{debug, warn};
use stowage::planning::PlacementRecord;
use stowage::util::FPA;

/// A single pallet drawn on the floor of the unit, `(x, y)` is its corner closest to the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedPallet {
    /// Index of the placement record (and pallet type) this pallet belongs to
    pub type_index: usize,
    pub label: String,
    pub x: f32,
    pub y: f32,
    pub length: f32,
    pub width: f32,
}

/// Emitted when the floor ran out before every accommodated pallet of a type was drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderWarning {
    pub type_index: usize,
    pub label: String,
    pub not_drawn: usize,
}

/// 2D arrangement of the accommodated pallets within the unit's footprint.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderedLayout {
    pub unit_length: f32,
    pub unit_width: f32,
    pub placed: Vec<PlacedPallet>,
    pub warnings: Vec<RenderWarning>,
    /// Number of pallets drawn per placement record
    pub drawn_counts: Vec<usize>,
}

impl RenderedLayout {
    /// Labels of all types with at least one drawn pallet, with their type index, in record order
    pub fn legend(&self) -> Vec<(usize, &str)> {
        let mut legend: Vec<(usize, &str)> = vec![];
        for pp in &self.placed {
            if legend.last().is_none_or(|(i, _)| *i != pp.type_index) {
                legend.push((pp.type_index, pp.label.as_str()));
            }
        }
        legend
    }

    /// Fraction of the floor covered by drawn pallets
    pub fn floor_usage(&self) -> f32 {
        let covered = self.placed.iter().map(|pp| pp.length * pp.width).sum::<f32>();
        covered / (self.unit_length * self.unit_width)
    }
}

/// Lays out placement records row by row on the floor of a unit.
///
/// A cursor starts at the origin and advances along the length axis. When the next
/// pallet would cross the far end it wraps to a new row, moving along the width axis
/// by the width of that pallet. The cursor carries over from one type to the next.
/// When a new row would cross the side of the unit the remaining pallets of that type
/// are skipped with a warning.
///
/// Only `accommodated_count` is used; this arrangement is independent of how the
/// planner arrived at that number and may draw fewer pallets.
/// A renderer holds the drawing state of a single call and is consumed by [`LayoutRenderer::render`].
pub struct LayoutRenderer<'a> {
    records: &'a [PlacementRecord],
    unit_length: f32,
    unit_width: f32,
    x: f32,
    y: f32,
}

impl<'a> LayoutRenderer<'a> {
    pub fn new(records: &'a [PlacementRecord], unit_length: f32, unit_width: f32) -> Self {
        Self {
            records,
            unit_length,
            unit_width,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn render(mut self) -> RenderedLayout {
        let mut placed = vec![];
        let mut warnings = vec![];
        let mut drawn_counts = vec![];

        for (type_index, record) in self.records.iter().enumerate() {
            let mut drawn = 0;
            while drawn < record.accommodated_count {
                match self.next_position(record.length, record.width) {
                    Some((x, y)) => {
                        placed.push(PlacedPallet {
                            type_index,
                            label: record.label.clone(),
                            x,
                            y,
                            length: record.length,
                            width: record.width,
                        });
                        drawn += 1;
                    }
                    None => {
                        let not_drawn = record.accommodated_count - drawn;
                        warn!(
                            "[RENDER] no more floor space for pallet type {:?}, {} of {} not drawn",
                            record.label, not_drawn, record.accommodated_count
                        );
                        warnings.push(RenderWarning {
                            type_index,
                            label: record.label.clone(),
                            not_drawn,
                        });
                        break;
                    }
                }
            }
            debug!("[RENDER] {:?}: {} drawn", record.label, drawn);
            drawn_counts.push(drawn);
        }

        RenderedLayout {
            unit_length: self.unit_length,
            unit_width: self.unit_width,
            placed,
            warnings,
            drawn_counts,
        }
    }

    /// Moves the cursor past a pallet of `length` x `width` and returns where it was placed,
    /// `None` if it does not fit in the remaining floor.
    fn next_position(&mut self, length: f32, width: f32) -> Option<(f32, f32)> {
        if FPA(length) > FPA(self.unit_length) {
            return None;
        }
        if FPA(self.x + length) > FPA(self.unit_length) {
            self.x = 0.0;
            self.y += width;
        }
        if FPA(self.y + width) > FPA(self.unit_width) {
            return None;
        }
        let position = (self.x, self.y);
        self.x += length;
        Some(position)
    }
}
