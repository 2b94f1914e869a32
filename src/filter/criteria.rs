//! Query criteria and the filter factory
//!
//! Every criterion is optional. A present criterion yields exactly one
//! filter; an absent one yields none. Presence is what counts, so a bound
//! of `0.0` and `hazardous = Some(false)` are real constraints.

use chrono::NaiveDate;

use super::attribute::{AttributeFilter, CompareOp};

/// User-supplied query criteria
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    /// Approach occurs on this date
    pub date: Option<NaiveDate>,
    /// Approach occurs on or after this date
    pub start_date: Option<NaiveDate>,
    /// Approach occurs on or before this date
    pub end_date: Option<NaiveDate>,
    pub distance_min: Option<f64>,
    pub distance_max: Option<f64>,
    pub velocity_min: Option<f64>,
    pub velocity_max: Option<f64>,
    /// Bounds on the diameter of the linked NEO
    pub diameter_min: Option<f64>,
    pub diameter_max: Option<f64>,
    /// Hazard flag of the linked NEO
    pub hazardous: Option<bool>,
}

impl Criteria {
    /// Creates criteria matching every approach
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    pub fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    pub fn distance_min(mut self, distance: f64) -> Self {
        self.distance_min = Some(distance);
        self
    }

    pub fn distance_max(mut self, distance: f64) -> Self {
        self.distance_max = Some(distance);
        self
    }

    pub fn velocity_min(mut self, velocity: f64) -> Self {
        self.velocity_min = Some(velocity);
        self
    }

    pub fn velocity_max(mut self, velocity: f64) -> Self {
        self.velocity_max = Some(velocity);
        self
    }

    pub fn diameter_min(mut self, diameter: f64) -> Self {
        self.diameter_min = Some(diameter);
        self
    }

    pub fn diameter_max(mut self, diameter: f64) -> Self {
        self.diameter_max = Some(diameter);
        self
    }

    pub fn hazardous(mut self, hazardous: bool) -> Self {
        self.hazardous = Some(hazardous);
        self
    }

    /// Returns true if no criterion is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Builds the conjunction of filters for `criteria`.
///
/// Filters come out in field order: date, start date, end date, distance,
/// velocity, diameter (min before max), hazardous.
pub fn create_filters(criteria: &Criteria) -> Vec<AttributeFilter> {
    let mut filters = Vec::new();

    let dates = [
        (criteria.date, CompareOp::Eq),
        (criteria.start_date, CompareOp::Ge),
        (criteria.end_date, CompareOp::Le),
    ];
    for (date, op) in dates {
        if let Some(date) = date {
            filters.push(AttributeFilter::date(op, date));
        }
    }

    let bounds: [(Option<f64>, CompareOp, fn(CompareOp, f64) -> AttributeFilter); 6] = [
        (criteria.distance_min, CompareOp::Ge, AttributeFilter::distance),
        (criteria.distance_max, CompareOp::Le, AttributeFilter::distance),
        (criteria.velocity_min, CompareOp::Ge, AttributeFilter::velocity),
        (criteria.velocity_max, CompareOp::Le, AttributeFilter::velocity),
        (criteria.diameter_min, CompareOp::Ge, AttributeFilter::diameter),
        (criteria.diameter_max, CompareOp::Le, AttributeFilter::diameter),
    ];
    for (bound, op, build) in bounds {
        if let Some(bound) = bound {
            filters.push(build(op, bound));
        }
    }

    if let Some(hazardous) = criteria.hazardous {
        filters.push(AttributeFilter::hazardous(CompareOp::Eq, hazardous));
    }

    filters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Attribute;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_empty_criteria_no_filters() {
        let criteria = Criteria::new();
        assert!(criteria.is_empty());
        assert!(create_filters(&criteria).is_empty());
    }

    #[test]
    fn test_one_filter_per_criterion_in_order() {
        let criteria = Criteria::new()
            .on_date(ymd(2020, 1, 1))
            .start_date(ymd(2019, 1, 1))
            .end_date(ymd(2021, 1, 1))
            .distance_min(0.1)
            .distance_max(0.5)
            .velocity_min(1.0)
            .velocity_max(20.0)
            .diameter_min(0.5)
            .diameter_max(10.0)
            .hazardous(true);

        let filters = create_filters(&criteria);
        assert_eq!(
            filters,
            vec![
                AttributeFilter::date(CompareOp::Eq, ymd(2020, 1, 1)),
                AttributeFilter::date(CompareOp::Ge, ymd(2019, 1, 1)),
                AttributeFilter::date(CompareOp::Le, ymd(2021, 1, 1)),
                AttributeFilter::distance(CompareOp::Ge, 0.1),
                AttributeFilter::distance(CompareOp::Le, 0.5),
                AttributeFilter::velocity(CompareOp::Ge, 1.0),
                AttributeFilter::velocity(CompareOp::Le, 20.0),
                AttributeFilter::diameter(CompareOp::Ge, 0.5),
                AttributeFilter::diameter(CompareOp::Le, 10.0),
                AttributeFilter::hazardous(CompareOp::Eq, true),
            ]
        );
    }

    #[test]
    fn test_zero_bounds_are_applied() {
        let criteria = Criteria::new()
            .distance_min(0.0)
            .velocity_min(0.0)
            .diameter_max(0.0);

        let filters = create_filters(&criteria);
        assert_eq!(filters.len(), 3);
        assert_eq!(filters[0], AttributeFilter::distance(CompareOp::Ge, 0.0));
        assert_eq!(filters[1], AttributeFilter::velocity(CompareOp::Ge, 0.0));
        assert_eq!(filters[2], AttributeFilter::diameter(CompareOp::Le, 0.0));
    }

    #[test]
    fn test_hazardous_false_is_applied() {
        let criteria = Criteria::new().hazardous(false);
        assert!(!criteria.is_empty());

        let filters = create_filters(&criteria);
        assert_eq!(filters.len(), 1);
        assert_eq!(filters[0].attribute(), Attribute::Hazardous);
        assert_eq!(filters[0], AttributeFilter::hazardous(CompareOp::Eq, false));
    }

    #[test]
    fn test_factory_is_deterministic() {
        let criteria = Criteria::new().velocity_max(3.0).start_date(ymd(2020, 6, 1));
        assert_eq!(create_filters(&criteria), create_filters(&criteria));
    }
}
