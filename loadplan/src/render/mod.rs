/// Conversion of a rendered layout into an SVG document
pub mod layout_to_svg;
/// Row-fill arrangement of placement records on the unit's floor
pub mod row_fill;
pub mod svg_util;

#[doc(inline)]
pub use layout_to_svg::layout_to_svg;
#[doc(inline)]
pub use row_fill::{LayoutRenderer, PlacedPallet, RenderWarning, RenderedLayout};
