use crate::feed::models::Unit;
use crate::filter::criteria::FilterCriteria;
use crate::filter::patterns::{bathroom_count, count_pattern, Room};
use regex::Regex;

/// Evaluates a predicate set against the unit collection.
///
/// Stateless between calls: every `apply` recomputes the full subset from
/// scratch. The bedroom pattern is compiled once per criteria.
pub struct FilterEngine {
    criteria: FilterCriteria,
    bedroom_pattern: Option<Regex>,
}

impl FilterEngine {
    pub fn new(criteria: FilterCriteria) -> Self {
        let bedroom_pattern = criteria.bedrooms.as_deref().and_then(|count| {
            count_pattern(Room::Bedroom, count)
                .map_err(|e| log::warn!("Bedroom selection '{}' not usable: {}", count, e))
                .ok()
        });

        Self {
            criteria,
            bedroom_pattern,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Units satisfying every active predicate, in collection order.
    pub fn apply<'u>(&self, units: &'u [Unit]) -> Vec<&'u Unit> {
        units.iter().filter(|unit| self.matches(unit)).collect()
    }

    /// Same as `apply`, as positions into the collection.
    pub fn apply_indices(&self, units: &[Unit]) -> Vec<usize> {
        units
            .iter()
            .enumerate()
            .filter(|(_, unit)| self.matches(unit))
            .map(|(idx, _)| idx)
            .collect()
    }

    pub fn matches(&self, unit: &Unit) -> bool {
        // Not-for-market units never show, whatever else is selected
        if unit.is_hpd() {
            return false;
        }

        self.matches_building(unit)
            && self.matches_bedrooms(unit)
            && self.matches_bathrooms(unit)
            && self.matches_outdoor(unit)
            && self.matches_price(unit)
    }

    fn matches_building(&self, unit: &Unit) -> bool {
        match &self.criteria.building {
            Some(building) => unit.building == *building,
            None => true,
        }
    }

    fn matches_bedrooms(&self, unit: &Unit) -> bool {
        if self.criteria.bedrooms.is_none() {
            return true;
        }
        let Some(pattern) = &self.bedroom_pattern else {
            return false;
        };

        let unit_type = unit.unit_type.as_deref().unwrap_or("").trim();
        pattern.is_match(unit_type) || pattern.is_match(unit.bed_bath.trim())
    }

    fn matches_bathrooms(&self, unit: &Unit) -> bool {
        match self.criteria.bathrooms {
            Some(selected) => bathroom_count(&unit.bed_bath) == selected,
            None => true,
        }
    }

    fn matches_outdoor(&self, unit: &Unit) -> bool {
        let Some(selected) = &self.criteria.outdoor else {
            return true;
        };

        let outdoor = unit.outdoor.to_lowercase();
        if selected == "none" {
            outdoor.is_empty() || outdoor == "none"
        } else {
            outdoor.contains(selected.as_str())
        }
    }

    fn matches_price(&self, unit: &Unit) -> bool {
        match self.criteria.price {
            Some(window) => window.contains(unit.rent.amount_or_zero()),
            None => true,
        }
    }
}

/// One-shot helper for callers that do not keep an engine around.
pub fn filter_units<'u>(units: &'u [Unit], criteria: &FilterCriteria) -> Vec<&'u Unit> {
    FilterEngine::new(criteria.clone()).apply(units)
}
