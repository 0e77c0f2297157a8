//! Closed contour (ring) is a sequence of points describing a polygon boundary.
//!
//! Contours are implicitly closed: the last point is connected to the first one, and the first point should not be
//! repeated at the end of the sequence. [`ClosedContour::iter_segments`] takes care of the closing segment.
//!
//! This differs from the OGC `LinearRing`, where the ring is closed by repeating the first point. If the input does
//! repeat the first point, the closing segment has zero length, which does not change the result of
//! [`point_in_ring`](crate::point_in_ring).

use crate::segment::Segment;

/// A closed contour. See module documentation for details.
pub trait ClosedContour {
    /// Type of the points the contour is consisted of.
    type Point;

    /// Iterate over the points of the contour.
    fn iter_points(&self) -> impl Iterator<Item = &'_ Self::Point>;

    /// Iterates over segments of the contour, including the segment between the last and the first points.
    fn iter_segments(&self) -> impl Iterator<Item = Segment<'_, Self::Point>> {
        ContourSegmentIterator::new(self.iter_points())
    }

    /// Returns true if the contour has at least 3 points, which is the minimum for it to enclose any area.
    fn is_ring(&self) -> bool {
        self.iter_points().nth(2).is_some()
    }
}

/// Iterator of contour segments.
#[derive(Debug, Clone)]
pub struct ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    points_iter: Iter,
    first_point: Option<&'a P>,
    prev_point: Option<&'a P>,
}

impl<'a, P, Iter> ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    fn new(points_iter: Iter) -> Self {
        Self {
            points_iter,
            first_point: None,
            prev_point: None,
        }
    }
}

impl<'a, P, Iter> Iterator for ContourSegmentIterator<'a, P, Iter>
where
    Iter: Iterator<Item = &'a P>,
{
    type Item = Segment<'a, P>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(next_point) = self.points_iter.next() else {
                let first = self.first_point.take()?;
                let last = self.prev_point.take()?;
                return Some(Segment(last, first));
            };

            match self.prev_point.replace(next_point) {
                Some(prev) => return Some(Segment(prev, next_point)),
                None => self.first_point = Some(next_point),
            }
        }
    }
}
