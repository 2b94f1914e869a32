//! Close-approach records

use chrono::NaiveDateTime;

use super::time::format_approach_time;
use super::NeoId;

/// A single pass of a NEO near Earth.
///
/// `designation` is the foreign key used during linkage. After linkage the
/// approach carries the index of its NEO, or stays unlinked if no NEO has
/// that designation.
#[derive(Debug, Clone)]
pub struct CloseApproach {
    designation: String,
    time: NaiveDateTime,
    distance: f64,
    velocity: f64,
    neo: Option<NeoId>,
}

impl CloseApproach {
    /// Creates an unlinked approach.
    ///
    /// `distance` is in astronomical units, `velocity` in km/s.
    pub fn new(
        designation: impl Into<String>,
        time: NaiveDateTime,
        distance: f64,
        velocity: f64,
    ) -> Self {
        Self {
            designation: designation.into(),
            time,
            distance,
            velocity,
            neo: None,
        }
    }

    /// Designation of the approaching NEO as given by the source
    pub fn designation(&self) -> &str {
        &self.designation
    }

    pub fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Approach time in canonical `YYYY-MM-DD HH:MM` form
    pub fn time_str(&self) -> String {
        format_approach_time(&self.time)
    }

    /// Nominal approach distance in au
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Relative approach velocity in km/s
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Linked NEO, if linkage found one
    pub fn neo(&self) -> Option<NeoId> {
        self.neo
    }

    pub fn is_linked(&self) -> bool {
        self.neo.is_some()
    }

    /// Links this approach to its NEO. A link is set once and never replaced.
    pub(crate) fn link(&mut self, neo: NeoId) {
        debug_assert!(self.neo.is_none(), "approach linked twice");
        if self.neo.is_none() {
            self.neo = Some(neo);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_approach_time;

    fn approach() -> CloseApproach {
        let time = parse_approach_time("2020-Jan-01 12:30").unwrap();
        CloseApproach::new("433", time, 0.15, 5.2)
    }

    #[test]
    fn test_new_is_unlinked() {
        let ca = approach();
        assert_eq!(ca.designation(), "433");
        assert_eq!(ca.time_str(), "2020-01-01 12:30");
        assert_eq!(ca.distance(), 0.15);
        assert_eq!(ca.velocity(), 5.2);
        assert!(!ca.is_linked());
    }

    #[test]
    fn test_link() {
        let mut ca = approach();
        ca.link(NeoId(3));
        assert_eq!(ca.neo(), Some(NeoId(3)));
    }
}
