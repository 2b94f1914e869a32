//! In-memory NEO database
//!
//! Owns both record collections, links them once at construction, then
//! answers lookups and queries read-only.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::filter::AttributeFilter;
use crate::model::{ApproachId, CloseApproach, NearEarthObject, NeoId};
use crate::observability::{Event, Logger, Severity};

use super::view::ApproachView;

/// Outcome of the linkage pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinkReport {
    /// NEO records loaded
    pub neos: usize,
    /// Approach records loaded
    pub approaches: usize,
    /// Approaches attached to a NEO
    pub linked: usize,
    /// Approaches whose designation matched no NEO
    pub unlinked: usize,
    /// NEO records shadowed by an earlier record with the same designation
    pub duplicate_designations: usize,
}

/// A linked collection of NEOs and their close approaches
#[derive(Debug)]
pub struct NeoDatabase {
    neos: Vec<NearEarthObject>,
    approaches: Vec<CloseApproach>,
    by_designation: HashMap<String, NeoId>,
    by_name: HashMap<String, NeoId>,
    report: LinkReport,
}

impl NeoDatabase {
    /// Creates a database and links every approach to its NEO.
    ///
    /// Approach order is preserved and is the order queries yield results in.
    /// Approaches with no matching designation stay unlinked. When several
    /// NEOs share a designation, the first one wins.
    pub fn new(mut neos: Vec<NearEarthObject>, mut approaches: Vec<CloseApproach>) -> Self {
        let mut by_designation = HashMap::with_capacity(neos.len());
        let mut by_name = HashMap::new();
        let mut duplicate_designations = 0;

        for (idx, neo) in neos.iter().enumerate() {
            match by_designation.entry(neo.designation().to_string()) {
                Entry::Occupied(_) => {
                    duplicate_designations += 1;
                    Logger::warn(
                        Event::DuplicateDesignation,
                        &[("designation", neo.designation())],
                    );
                }
                Entry::Vacant(slot) => {
                    slot.insert(NeoId(idx));
                    if let Some(name) = neo.name().filter(|name| !name.is_empty()) {
                        by_name.entry(name.to_string()).or_insert(NeoId(idx));
                    }
                }
            }
        }

        let mut linked = 0;
        for (idx, approach) in approaches.iter_mut().enumerate() {
            if let Some(&neo_id) = by_designation.get(approach.designation()) {
                approach.link(neo_id);
                neos[neo_id.0].attach_approach(ApproachId(idx));
                linked += 1;
            }
        }

        let report = LinkReport {
            neos: neos.len(),
            approaches: approaches.len(),
            linked,
            unlinked: approaches.len() - linked,
            duplicate_designations,
        };

        Logger::info(
            Event::DatabaseLinked,
            &[
                ("neos", &report.neos.to_string()),
                ("approaches", &report.approaches.to_string()),
                ("linked", &report.linked.to_string()),
                ("unlinked", &report.unlinked.to_string()),
            ],
        );

        Self {
            neos,
            approaches,
            by_designation,
            by_name,
            report,
        }
    }

    /// Returns the linkage outcome
    pub fn link_report(&self) -> LinkReport {
        self.report
    }

    pub fn neo_count(&self) -> usize {
        self.neos.len()
    }

    pub fn approach_count(&self) -> usize {
        self.approaches.len()
    }

    pub fn neo(&self, id: NeoId) -> Option<&NearEarthObject> {
        self.neos.get(id.0)
    }

    pub fn approach(&self, id: ApproachId) -> Option<&CloseApproach> {
        self.approaches.get(id.0)
    }

    /// Finds a NEO by primary designation (exact match)
    pub fn get_neo_by_designation(&self, designation: &str) -> Option<&NearEarthObject> {
        self.by_designation
            .get(designation)
            .and_then(|id| self.neo(*id))
    }

    /// Finds a NEO by IAU name (exact match). Unnamed NEOs are never found.
    pub fn get_neo_by_name(&self, name: &str) -> Option<&NearEarthObject> {
        self.by_name.get(name).and_then(|id| self.neo(*id))
    }

    /// Returns the view of one approach
    pub fn view(&self, id: ApproachId) -> Option<ApproachView<'_>> {
        self.approach(id).map(|approach| self.view_of(approach))
    }

    /// Every close approach of `neo`, in database order
    pub fn approaches_for<'a>(
        &'a self,
        neo: &'a NearEarthObject,
    ) -> impl Iterator<Item = ApproachView<'a>> + 'a {
        neo.approaches().iter().filter_map(move |id| self.view(*id))
    }

    /// Every close approach, in database order
    pub fn approaches(&self) -> impl Iterator<Item = ApproachView<'_>> + '_ {
        self.approaches
            .iter()
            .map(move |approach| self.view_of(approach))
    }

    /// Streams the approaches matching every filter.
    ///
    /// Full linear scan in database order. The iterator is lazy, so a
    /// downstream `limit` stops the scan early.
    pub fn query<'a>(
        &'a self,
        filters: &'a [AttributeFilter],
    ) -> impl Iterator<Item = ApproachView<'a>> + 'a {
        if Logger::enabled(Severity::Trace) {
            let plan = filters
                .iter()
                .map(|filter| filter.to_string())
                .collect::<Vec<_>>()
                .join(" AND ");
            Logger::trace(
                Event::QueryPlanned,
                &[("filters", &plan), ("count", &filters.len().to_string())],
            );
        }

        self.approaches()
            .filter(move |view| AttributeFilter::matches_all(filters, view))
    }

    fn view_of<'a>(&'a self, approach: &'a CloseApproach) -> ApproachView<'a> {
        ApproachView::new(approach, approach.neo().and_then(|id| self.neo(id)))
    }
}
