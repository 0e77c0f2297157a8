//! Polygon trait, see [`Polygon`].

use crate::contour::ClosedContour;

/// Polygon geometry. Polygon consists of one outer contour, and zero or more inner contours.
///
/// Inner contours represent *holes* in a polygon. They are kept so that the input geometry is preserved as is, but
/// containment checks in this crate only look at the outer contour.
pub trait Polygon {
    /// Contour type.
    type Contour: ClosedContour;

    /// Outer contour of the polygon.
    fn outer_contour(&self) -> &Self::Contour;
    /// Iterates over inner contours.
    fn inner_contours(&self) -> impl Iterator<Item = &'_ Self::Contour>;
}
