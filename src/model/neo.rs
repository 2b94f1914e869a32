//! Near-Earth object records

use std::fmt;

use super::ApproachId;

/// A catalogued near-Earth object.
///
/// The diameter is NaN when the source has no measurement. NaN compares
/// unequal to everything (itself included), so an unknown diameter never
/// satisfies a diameter bound.
#[derive(Debug, Clone)]
pub struct NearEarthObject {
    designation: String,
    name: Option<String>,
    diameter: f64,
    hazardous: bool,
    approaches: Vec<ApproachId>,
}

impl NearEarthObject {
    /// Creates an unmeasured, unnamed, non-hazardous NEO
    pub fn new(designation: impl Into<String>) -> Self {
        Self {
            designation: designation.into(),
            name: None,
            diameter: f64::NAN,
            hazardous: false,
            approaches: Vec::new(),
        }
    }

    /// Sets the human-readable name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the diameter in kilometers
    pub fn with_diameter(mut self, diameter: f64) -> Self {
        self.diameter = diameter;
        self
    }

    /// Sets the potentially-hazardous flag
    pub fn with_hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = hazardous;
        self
    }

    /// Primary designation
    pub fn designation(&self) -> &str {
        &self.designation
    }

    /// IAU name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Diameter in kilometers, NaN if unknown
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns true if the diameter was measured
    pub fn has_known_diameter(&self) -> bool {
        !self.diameter.is_nan()
    }

    pub fn hazardous(&self) -> bool {
        self.hazardous
    }

    /// Close approaches of this NEO, in database order
    pub fn approaches(&self) -> &[ApproachId] {
        &self.approaches
    }

    /// `"433 (Eros)"` when named, `"433"` otherwise
    pub fn fullname(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", self.designation, name),
            None => self.designation.clone(),
        }
    }

    /// Records a linked approach. Only the database calls this, during linkage.
    pub(crate) fn attach_approach(&mut self, id: ApproachId) {
        self.approaches.push(id);
    }
}

impl fmt::Display for NearEarthObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NEO {} has ", self.fullname())?;
        if self.has_known_diameter() {
            write!(f, "a diameter of {:.3} km", self.diameter)?;
        } else {
            write!(f, "an unknown diameter")?;
        }
        let hazard = if self.hazardous { "is" } else { "is not" };
        write!(f, " and {} potentially hazardous.", hazard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let neo = NearEarthObject::new("2020 AB");
        assert_eq!(neo.designation(), "2020 AB");
        assert!(neo.name().is_none());
        assert!(neo.diameter().is_nan());
        assert!(!neo.has_known_diameter());
        assert!(!neo.hazardous());
        assert!(neo.approaches().is_empty());
    }

    #[test]
    fn test_empty_name_is_not_absent() {
        let neo = NearEarthObject::new("433").with_name("");
        assert_eq!(neo.name(), Some(""));
    }

    #[test]
    fn test_fullname() {
        let named = NearEarthObject::new("433").with_name("Eros");
        assert_eq!(named.fullname(), "433 (Eros)");

        let unnamed = NearEarthObject::new("2020 AB");
        assert_eq!(unnamed.fullname(), "2020 AB");
    }

    #[test]
    fn test_display() {
        let neo = NearEarthObject::new("433")
            .with_name("Eros")
            .with_diameter(16.84);
        assert_eq!(
            neo.to_string(),
            "NEO 433 (Eros) has a diameter of 16.840 km and is not potentially hazardous."
        );

        let neo = NearEarthObject::new("2020 AB").with_hazardous(true);
        assert_eq!(
            neo.to_string(),
            "NEO 2020 AB has an unknown diameter and is potentially hazardous."
        );
    }
}
