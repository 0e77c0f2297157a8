use log::debug;

/// Change of the hovered feature after a pointer move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum HoverChange {
    /// The hovered feature is the same as before (or there is still no hovered feature).
    Unchanged,
    /// The pointer entered the feature with the given index, and no feature was hovered before.
    Entered(usize),
    /// The pointer left the feature with the given index, and no feature is hovered now.
    Left(usize),
    /// The pointer moved from one feature directly to another.
    Switched {
        /// Index of the previously hovered feature.
        from: usize,
        /// Index of the currently hovered feature.
        to: usize,
    },
}

/// Keeps track of the feature under the pointer between pointer move events.
///
/// Features are identified by their index in the feature collection, so the tracker must be [reset](Self::reset)
/// when the collection changes.
#[derive(Debug, Default, Clone)]
pub struct HoverTracker {
    hovered: Option<usize>,
}

impl HoverTracker {
    /// Creates a tracker with no hovered feature.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the currently hovered feature.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Records the feature found under the pointer and returns how the hover state changed.
    pub fn update(&mut self, hit: Option<usize>) -> HoverChange {
        let prev = std::mem::replace(&mut self.hovered, hit);
        let change = match (prev, hit) {
            (Some(from), Some(to)) if from == to => HoverChange::Unchanged,
            (None, None) => HoverChange::Unchanged,
            (None, Some(to)) => HoverChange::Entered(to),
            (Some(from), None) => HoverChange::Left(from),
            (Some(from), Some(to)) => HoverChange::Switched { from, to },
        };

        if change != HoverChange::Unchanged {
            debug!("Hover changed: {change:?}");
        }

        change
    }

    /// Forgets the hovered feature.
    pub fn reset(&mut self) -> HoverChange {
        self.update(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transitions() {
        let mut tracker = HoverTracker::new();
        assert_eq!(tracker.update(None), HoverChange::Unchanged);
        assert_eq!(tracker.update(Some(2)), HoverChange::Entered(2));
        assert_eq!(tracker.update(Some(2)), HoverChange::Unchanged);
        assert_eq!(
            tracker.update(Some(0)),
            HoverChange::Switched { from: 2, to: 0 }
        );
        assert_eq!(tracker.hovered(), Some(0));
        assert_eq!(tracker.update(None), HoverChange::Left(0));
        assert_eq!(tracker.update(None), HoverChange::Unchanged);
        assert_eq!(tracker.hovered(), None);
    }

    #[test]
    fn reset() {
        let mut tracker = HoverTracker::new();
        assert_eq!(tracker.reset(), HoverChange::Unchanged);

        tracker.update(Some(5));
        assert_eq!(tracker.reset(), HoverChange::Left(5));
        assert_eq!(tracker.hovered(), None);
    }
}
