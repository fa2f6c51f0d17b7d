// 🔎 Vehicle Search - Conjunctive filters + stable sort
// Mirrors the browse view: filter first, then order by one key

use crate::error::{GalaxyError, Result};
use crate::inventory::{MileageBand, VehicleRecord};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

// ============================================================================
// SORT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Price,
    Year,
    Horsepower,
    Mileage,
}

impl SortKey {
    /// Parameter value understood by the financing API's `sort_by`
    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Year => "year",
            SortKey::Horsepower => "horsepower",
            SortKey::Mileage => "mileage",
        }
    }

    fn compare(&self, a: &VehicleRecord, b: &VehicleRecord) -> Ordering {
        match self {
            SortKey::Price => a.price.total_cmp(&b.price),
            SortKey::Year => a.year.cmp(&b.year),
            SortKey::Horsepower => a.horsepower.cmp(&b.horsepower),
            SortKey::Mileage => a.mileage_band.ordinal().cmp(&b.mileage_band.ordinal()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_param(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Asc => "Ascending",
            SortOrder::Desc => "Descending",
        }
    }
}

/// Flip the sort direction
pub fn toggle(order: SortOrder) -> SortOrder {
    match order {
        SortOrder::Asc => SortOrder::Desc,
        SortOrder::Desc => SortOrder::Asc,
    }
}

// ============================================================================
// FILTERS
// ============================================================================

/// Browse-view filter state. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchFilters {
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub mileage_band: Option<MileageBand>,
    pub min_horsepower: Option<u32>,
    pub year: Option<i32>,
}

impl SearchFilters {
    /// Price bounds must be real numbers; NaN would silently match everything
    pub fn validate(&self) -> Result<()> {
        for (field, bound) in [("min_price", self.min_price), ("max_price", self.max_price)] {
            if let Some(value) = bound {
                if !value.is_finite() {
                    return Err(GalaxyError::invalid(
                        field,
                        format!("must be a finite number, got {}", value),
                    ));
                }
            }
        }
        Ok(())
    }

    /// True when `vehicle` satisfies every supplied constraint
    pub fn matches(&self, vehicle: &VehicleRecord) -> bool {
        if let Some(min) = self.min_price {
            if vehicle.price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if vehicle.price > max {
                return false;
            }
        }
        if let Some(band) = self.mileage_band {
            if vehicle.mileage_band != band {
                return false;
            }
        }
        if let Some(hp) = self.min_horsepower {
            if vehicle.horsepower < hp {
                return false;
            }
        }
        if let Some(year) = self.year {
            if vehicle.year != year {
                return false;
            }
        }
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == SearchFilters::default()
    }

    /// Render as financing-API `/filter` query parameters
    ///
    /// Only supplied constraints are emitted; a mileage band becomes its
    /// `mil_min`/`mil_max` bounds.
    pub fn to_query(&self, sort: SortKey, order: SortOrder, limit: u32) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();

        if let Some(min) = self.min_price {
            params.push(("price_min", min.to_string()));
        }
        if let Some(max) = self.max_price {
            params.push(("price_max", max.to_string()));
        }
        if let Some(hp) = self.min_horsepower {
            params.push(("hp_min", hp.to_string()));
        }
        if let Some(year) = self.year {
            params.push(("year", year.to_string()));
        }
        if let Some(band) = self.mileage_band {
            let (lo, hi) = band.mile_range();
            params.push(("mil_min", lo.to_string()));
            params.push(("mil_max", hi.to_string()));
        }

        params.push(("sort_by", sort.as_param().to_string()));
        params.push(("order", order.as_param().to_string()));
        params.push(("limit", limit.to_string()));
        params
    }
}

// ============================================================================
// FILTER + SORT
// ============================================================================

/// Filter `vehicles` by `filters`, then stably sort by `key`
///
/// The input slice is left untouched. Ties keep their input order in both
/// directions. No match yields an empty vector.
pub fn filter_and_sort(
    vehicles: &[VehicleRecord],
    filters: &SearchFilters,
    key: SortKey,
    order: SortOrder,
) -> Vec<VehicleRecord> {
    let mut results: Vec<VehicleRecord> = vehicles
        .iter()
        .filter(|v| filters.matches(v))
        .cloned()
        .collect();

    results.sort_by(|a, b| {
        let ordering = key.compare(a, b);
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });

    results
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::showroom;

    fn ids(vehicles: &[VehicleRecord]) -> Vec<u32> {
        vehicles.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_no_filters_keeps_everything() {
        let all = showroom();
        let results = filter_and_sort(&all, &SearchFilters::default(), SortKey::Price, SortOrder::Asc);
        assert_eq!(results.len(), all.len());
        assert_eq!(results.first().unwrap().id, 4); // Corolla 20100
        assert_eq!(results.last().unwrap().id, 11); // Tundra 48900
    }

    #[test]
    fn test_every_result_satisfies_constraints() {
        let all = showroom();
        let filters = SearchFilters {
            min_price: Some(25000.0),
            max_price: Some(45000.0),
            mileage_band: Some(MileageBand::Low),
            min_horsepower: Some(200),
            year: Some(2025),
        };

        let results = filter_and_sort(&all, &filters, SortKey::Horsepower, SortOrder::Desc);
        assert!(!results.is_empty());
        assert!(results.len() <= all.len());
        for v in &results {
            assert!(filters.matches(v));
            assert!(all.contains(v));
        }
        assert_eq!(ids(&results), vec![7, 9, 1, 5]);
    }

    #[test]
    fn test_no_match_is_empty() {
        let filters = SearchFilters {
            min_price: Some(100_000.0),
            ..Default::default()
        };
        let results = filter_and_sort(&showroom(), &filters, SortKey::Price, SortOrder::Asc);
        assert!(results.is_empty());
    }

    #[test]
    fn test_input_is_not_mutated() {
        let all = showroom();
        let before = all.clone();
        let _ = filter_and_sort(&all, &SearchFilters::default(), SortKey::Year, SortOrder::Desc);
        assert_eq!(all, before);
    }

    #[test]
    fn test_flipping_order_reverses_distinct_keys() {
        let all = showroom();
        // Prices are all distinct, so the descending order is the exact reverse
        let asc = filter_and_sort(&all, &SearchFilters::default(), SortKey::Price, SortOrder::Asc);
        let mut desc = filter_and_sort(&all, &SearchFilters::default(), SortKey::Price, toggle(SortOrder::Asc));
        desc.reverse();
        assert_eq!(asc, desc);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let all = showroom();
        let asc = filter_and_sort(&all, &SearchFilters::default(), SortKey::Mileage, SortOrder::Asc);
        let low: Vec<u32> = asc
            .iter()
            .filter(|v| v.mileage_band == MileageBand::Low)
            .map(|v| v.id)
            .collect();
        assert_eq!(low, vec![1, 3, 5, 7, 9, 11, 13, 15, 20]);
        assert_eq!(asc.last().unwrap().mileage_band, MileageBand::High);

        let desc = filter_and_sort(&all, &SearchFilters::default(), SortKey::Mileage, SortOrder::Desc);
        assert_eq!(ids(&desc[..4]), vec![4, 12, 17, 19]);
    }

    #[test]
    fn test_idempotent() {
        let all = showroom();
        let filters = SearchFilters {
            max_price: Some(35000.0),
            ..Default::default()
        };
        let once = filter_and_sort(&all, &filters, SortKey::Year, SortOrder::Desc);
        let twice = filter_and_sort(&once, &filters, SortKey::Year, SortOrder::Desc);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_year_filter_is_exact() {
        let filters = SearchFilters {
            year: Some(2023),
            ..Default::default()
        };
        let results = filter_and_sort(&showroom(), &filters, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&results), vec![4, 19, 8, 12]);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let filters = SearchFilters {
            min_price: Some(28500.0),
            max_price: Some(28500.0),
            ..Default::default()
        };
        let results = filter_and_sort(&showroom(), &filters, SortKey::Price, SortOrder::Asc);
        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn test_non_finite_price_bound_is_rejected() {
        let nan_min = SearchFilters {
            min_price: Some(f64::NAN),
            ..Default::default()
        };
        assert_eq!(nan_min.validate().unwrap_err().field(), Some("min_price"));

        let inf_max = SearchFilters {
            max_price: Some(f64::INFINITY),
            ..Default::default()
        };
        assert_eq!(inf_max.validate().unwrap_err().field(), Some("max_price"));

        let bounded = SearchFilters {
            min_price: Some(20000.0),
            max_price: Some(30000.0),
            ..Default::default()
        };
        assert!(bounded.validate().is_ok());
        assert!(SearchFilters::default().validate().is_ok());
    }

    #[test]
    fn test_to_query() {
        let filters = SearchFilters {
            min_price: Some(20000.0),
            mileage_band: Some(MileageBand::Medium),
            ..Default::default()
        };
        let query = filters.to_query(SortKey::Horsepower, SortOrder::Desc, 50);
        assert_eq!(
            query,
            vec![
                ("price_min", "20000".to_string()),
                ("mil_min", "30000".to_string()),
                ("mil_max", "60000".to_string()),
                ("sort_by", "horsepower".to_string()),
                ("order", "desc".to_string()),
                ("limit", "50".to_string()),
            ]
        );
        assert!(SearchFilters::default().is_empty());
        assert!(!filters.is_empty());
    }
}
