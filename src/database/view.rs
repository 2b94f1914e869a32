//! Read-only view of a close approach with its linked NEO

use std::fmt;

use crate::model::{CloseApproach, NearEarthObject};

/// A close approach paired with its linked NEO, if any.
///
/// Filters and writers read approaches through this view so that NEO
/// attributes resolve without the approach owning its NEO.
#[derive(Debug, Clone, Copy)]
pub struct ApproachView<'a> {
    approach: &'a CloseApproach,
    neo: Option<&'a NearEarthObject>,
}

impl<'a> ApproachView<'a> {
    pub fn new(approach: &'a CloseApproach, neo: Option<&'a NearEarthObject>) -> Self {
        Self { approach, neo }
    }

    pub fn approach(&self) -> &'a CloseApproach {
        self.approach
    }

    /// Linked NEO, `None` for an unlinked approach
    pub fn neo(&self) -> Option<&'a NearEarthObject> {
        self.neo
    }

    /// Full name of the linked NEO, or the raw designation if unlinked
    pub fn neo_fullname(&self) -> String {
        match self.neo {
            Some(neo) => neo.fullname(),
            None => self.approach.designation().to_string(),
        }
    }
}

impl fmt::Display for ApproachView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "On {}, '{}' approaches Earth at a distance of {:.2} au and a velocity of {:.2} km/s.",
            self.approach.time_str(),
            self.neo_fullname(),
            self.approach.distance(),
            self.approach.velocity()
        )
    }
}
