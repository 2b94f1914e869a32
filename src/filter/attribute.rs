//! Attribute filters over close approaches
//!
//! A filter is an attribute kind, a comparison operator and a reference
//! value. Operators and attributes are independent: extraction dispatches
//! on the attribute, comparison dispatches on the operator.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::database::ApproachView;

use super::errors::{FilterError, FilterResult};

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// attribute == value
    Eq,
    /// attribute <= value
    Le,
    /// attribute >= value
    Ge,
}

impl CompareOp {
    /// Returns the operation name for plan output
    pub fn op_name(&self) -> &'static str {
        match self {
            CompareOp::Eq => "eq",
            CompareOp::Le => "le",
            CompareOp::Ge => "ge",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Le => "<=",
            CompareOp::Ge => ">=",
        }
    }

    /// Applies the operator to the ordering of `attribute` relative to `value`.
    ///
    /// `None` (incomparable, e.g. NaN) fails every operator, equality included.
    pub fn apply(&self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (CompareOp::Eq, Some(ord)) => ord == Ordering::Equal,
            (CompareOp::Le, Some(ord)) => ord != Ordering::Greater,
            (CompareOp::Ge, Some(ord)) => ord != Ordering::Less,
        }
    }
}

/// Attribute kinds a filter can test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Calendar date of the approach time
    Date,
    /// Nominal approach distance (au)
    Distance,
    /// Relative approach velocity (km/s)
    Velocity,
    /// Diameter of the linked NEO (km)
    Diameter,
    /// Hazard flag of the linked NEO
    Hazardous,
}

impl Attribute {
    pub fn name(&self) -> &'static str {
        match self {
            Attribute::Date => "date",
            Attribute::Distance => "distance",
            Attribute::Velocity => "velocity",
            Attribute::Diameter => "diameter",
            Attribute::Hazardous => "hazardous",
        }
    }

    /// Returns true if the attribute is read through the linked NEO
    pub fn requires_link(&self) -> bool {
        matches!(self, Attribute::Diameter | Attribute::Hazardous)
    }

    /// Returns true if `value` has the type this attribute extracts
    pub fn accepts(&self, value: &AttributeValue) -> bool {
        matches!(
            (self, value),
            (Attribute::Date, AttributeValue::Date(_))
                | (Attribute::Distance, AttributeValue::Float(_))
                | (Attribute::Velocity, AttributeValue::Float(_))
                | (Attribute::Diameter, AttributeValue::Float(_))
                | (Attribute::Hazardous, AttributeValue::Bool(_))
        )
    }

    /// Reads this attribute from an approach.
    ///
    /// Returns `None` for linked attributes of an unlinked approach.
    pub fn extract(&self, view: &ApproachView<'_>) -> Option<AttributeValue> {
        let approach = view.approach();
        match self {
            Attribute::Date => Some(AttributeValue::Date(approach.time().date())),
            Attribute::Distance => Some(AttributeValue::Float(approach.distance())),
            Attribute::Velocity => Some(AttributeValue::Float(approach.velocity())),
            Attribute::Diameter => view.neo().map(|neo| AttributeValue::Float(neo.diameter())),
            Attribute::Hazardous => view.neo().map(|neo| AttributeValue::Bool(neo.hazardous())),
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value extracted from, or compared against, an approach
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AttributeValue {
    Date(NaiveDate),
    Float(f64),
    Bool(bool),
}

impl AttributeValue {
    /// Returns the value kind name for error messages
    pub fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Date(_) => "date",
            AttributeValue::Float(_) => "float",
            AttributeValue::Bool(_) => "bool",
        }
    }

    /// Orders `self` relative to `other`; `None` if the values are incomparable
    pub fn compare(&self, other: &AttributeValue) -> Option<Ordering> {
        match (self, other) {
            (AttributeValue::Date(a), AttributeValue::Date(b)) => Some(a.cmp(b)),
            (AttributeValue::Float(a), AttributeValue::Float(b)) => a.partial_cmp(b),
            (AttributeValue::Bool(a), AttributeValue::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeValue::Date(d) => write!(f, "{}", d),
            AttributeValue::Float(v) => write!(f, "{}", v),
            AttributeValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// A single-attribute predicate on a close approach
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeFilter {
    attribute: Attribute,
    op: CompareOp,
    value: AttributeValue,
}

impl AttributeFilter {
    /// Creates a filter, checking that `value` fits the attribute
    pub fn new(attribute: Attribute, op: CompareOp, value: AttributeValue) -> FilterResult<Self> {
        if !attribute.accepts(&value) {
            return Err(FilterError::UnsupportedCriterion {
                attribute: attribute.name(),
                value_kind: value.kind(),
            });
        }
        Ok(Self {
            attribute,
            op,
            value,
        })
    }

    /// Date filter on the calendar date of the approach
    pub fn date(op: CompareOp, date: NaiveDate) -> Self {
        Self::typed(Attribute::Date, op, AttributeValue::Date(date))
    }

    /// Distance filter (au)
    pub fn distance(op: CompareOp, distance: f64) -> Self {
        Self::typed(Attribute::Distance, op, AttributeValue::Float(distance))
    }

    /// Velocity filter (km/s)
    pub fn velocity(op: CompareOp, velocity: f64) -> Self {
        Self::typed(Attribute::Velocity, op, AttributeValue::Float(velocity))
    }

    /// Diameter filter on the linked NEO (km)
    pub fn diameter(op: CompareOp, diameter: f64) -> Self {
        Self::typed(Attribute::Diameter, op, AttributeValue::Float(diameter))
    }

    /// Hazard filter on the linked NEO
    pub fn hazardous(op: CompareOp, hazardous: bool) -> Self {
        Self::typed(Attribute::Hazardous, op, AttributeValue::Bool(hazardous))
    }

    fn typed(attribute: Attribute, op: CompareOp, value: AttributeValue) -> Self {
        debug_assert!(attribute.accepts(&value));
        Self {
            attribute,
            op,
            value,
        }
    }

    pub fn attribute(&self) -> Attribute {
        self.attribute
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// Reference value
    pub fn value(&self) -> AttributeValue {
        self.value
    }

    /// Reads the filtered attribute from an approach
    pub fn extract(&self, view: &ApproachView<'_>) -> Option<AttributeValue> {
        self.attribute.extract(view)
    }

    /// Evaluates `op(extract(approach), value)`.
    ///
    /// A missing attribute (unlinked approach) never matches.
    pub fn matches(&self, view: &ApproachView<'_>) -> bool {
        match self.extract(view) {
            Some(actual) => self.op.apply(actual.compare(&self.value)),
            None => false,
        }
    }

    /// Checks if an approach matches all filters (AND semantics)
    pub fn matches_all(filters: &[AttributeFilter], view: &ApproachView<'_>) -> bool {
        filters.iter().all(|filter| filter.matches(view))
    }
}

impl fmt::Display for AttributeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.op.symbol(), self.value)
    }
}
