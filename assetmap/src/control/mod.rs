//! This module turns pointer input into decisions about map features.
//!
//! The UI layer is responsible for converting screen pointer positions into geographic coordinates. It then gives
//! the resulting [`PointerEvent`] together with the currently loaded features to the [`InteractionHandler`], which
//! returns an [`Interaction`]:
//!
//! * pointer moves produce [`Interaction::Hover`] describing whether the highlighted feature must change,
//! * clicks produce [`Interaction::OpenReport`] with a [`ReportRequest`] used to open the report form. A click always
//!   opens a report at the clicked location; if there is a feature at that location, the request references it.

use assetmap_types::geo::GeoPoint2d;
use log::debug;

use crate::feature::Feature;
use crate::locator::FeatureLocator;

mod hover;

pub use hover::{HoverChange, HoverTracker};

/// Pointer input already converted into map coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved to the given location.
    Moved(GeoPoint2d),
    /// Primary button was clicked (or the map was tapped) at the given location.
    Clicked(GeoPoint2d),
}

/// Request to open an asset report form.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ReportRequest {
    /// Clicked location.
    pub location: GeoPoint2d,
    /// Index of the feature at the clicked location.
    pub feature: Option<usize>,
}

impl ReportRequest {
    /// Location as it is written into the report: `"lat, lon"` with 5 decimal digits.
    pub fn location_label(&self) -> String {
        self.location.to_string()
    }

    /// Name of the reported feature, used to prefill the place name of the report.
    pub fn place_name<'a, F: Feature>(&self, features: &'a [F]) -> Option<&'a str> {
        features.get(self.feature?)?.name()
    }
}

/// Result of handling a [`PointerEvent`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Interaction {
    /// Hovered feature change.
    Hover(HoverChange),
    /// A report form should be opened.
    OpenReport(ReportRequest),
}

/// Stateful pointer event handler. See module documentation.
#[derive(Debug, Default, Clone)]
pub struct InteractionHandler {
    locator: FeatureLocator,
    hover: HoverTracker,
}

impl InteractionHandler {
    /// Creates a new handler using the given locator.
    pub fn new(locator: FeatureLocator) -> Self {
        Self {
            locator,
            hover: HoverTracker::new(),
        }
    }

    /// Locator used by the handler.
    pub fn locator(&self) -> &FeatureLocator {
        &self.locator
    }

    /// Index of the currently hovered feature.
    pub fn hovered(&self) -> Option<usize> {
        self.hover.hovered()
    }

    /// Handles the event against the given feature collection.
    pub fn handle<F>(&mut self, event: &PointerEvent, features: &[F]) -> Interaction
    where
        F: Feature<Point = GeoPoint2d>,
    {
        match event {
            PointerEvent::Moved(position) => {
                let hit = self.locator.locate_index(position, features);
                Interaction::Hover(self.hover.update(hit))
            }
            PointerEvent::Clicked(position) => {
                let request = ReportRequest {
                    location: *position,
                    feature: self.locator.locate_index(position, features),
                };
                debug!("Opening report at {}: {:?}", request.location_label(), request.feature);
                Interaction::OpenReport(request)
            }
        }
    }

    /// Clears the hover state. Must be called when the feature collection is replaced.
    pub fn reset_hover(&mut self) -> HoverChange {
        self.hover.reset()
    }
}
