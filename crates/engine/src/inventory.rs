//! Pure inventory derivations.
//!
//! Given the static dataset and a [`FilterState`], everything the inventory
//! view shows (filtered rows, summary counters, per-vendor distribution) is
//! recomputed synchronously on every input change. No caching; the dataset
//! is five records.

use flowdeck_types::{InventoryItem, ItemStatus};

/// The three independent filter inputs. `None` selections are the "All"
/// wildcard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub vendor: Option<String>,
    pub status: Option<ItemStatus>,
}

impl FilterState {
    /// Whether an item passes all three predicates: case-insensitive
    /// substring match on name or SKU, exact vendor match, exact status
    /// match.
    pub fn matches(&self, item: &InventoryItem) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = item.name.to_lowercase().contains(&needle)
            || item.sku.to_lowercase().contains(&needle);
        let matches_vendor = self.vendor.as_deref().is_none_or(|v| item.vendor == v);
        let matches_status = self.status.is_none_or(|s| item.status == s);
        matches_search && matches_vendor && matches_status
    }
}

/// Apply the filter to the dataset, preserving dataset order.
pub fn filter<'a>(items: &'a [InventoryItem], state: &FilterState) -> Vec<&'a InventoryItem> {
    items.iter().filter(|item| state.matches(item)).collect()
}

/// Counters over the filtered set. `total == available + not_purchased`
/// holds for every filter combination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub available: usize,
    pub not_purchased: usize,
}

pub fn summarize(filtered: &[&InventoryItem]) -> Summary {
    let available = filtered
        .iter()
        .filter(|i| i.status == ItemStatus::Available)
        .count();
    Summary {
        total: filtered.len(),
        available,
        not_purchased: filtered.len() - available,
    }
}

/// Distinct vendors of the dataset in first-appearance order.
pub fn vendors(items: &[InventoryItem]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item.vendor) {
            out.push(item.vendor.clone());
        }
    }
    out
}

/// One count per vendor over the filtered set, zero-count vendors included.
/// Segment counts always sum to the filtered total.
pub fn vendor_counts(vendors: &[String], filtered: &[&InventoryItem]) -> Vec<(String, usize)> {
    vendors
        .iter()
        .map(|vendor| {
            let count = filtered.iter().filter(|i| &i.vendor == vendor).count();
            (vendor.clone(), count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowdeck_types::base_inventory;

    fn skus(filtered: &[&InventoryItem]) -> Vec<&str> {
        filtered.iter().map(|i| i.sku.as_str()).collect()
    }

    #[test]
    fn empty_filter_passes_everything() {
        let filtered = filter(base_inventory(), &FilterState::default());
        assert_eq!(filtered.len(), 5);
        let summary = summarize(&filtered);
        assert_eq!(summary.total, 5);
        assert_eq!(summary.available, 3);
        assert_eq!(summary.not_purchased, 2);
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let state = FilterState {
            search: "glove".into(),
            ..Default::default()
        };
        let filtered = filter(base_inventory(), &state);
        assert_eq!(skus(&filtered), vec!["SAP-1002"]);
    }

    #[test]
    fn search_matches_sku_too() {
        let state = FilterState {
            search: "sap-1003".into(),
            ..Default::default()
        };
        let filtered = filter(base_inventory(), &state);
        assert_eq!(skus(&filtered), vec!["SAP-1003"]);
    }

    #[test]
    fn vendor_filter_is_exact() {
        let state = FilterState {
            vendor: Some("CarePlus".into()),
            ..Default::default()
        };
        let filtered = filter(base_inventory(), &state);
        assert_eq!(skus(&filtered), vec!["SAP-1002", "SAP-1005"]);
        let summary = summarize(&filtered);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.available, 1);
        assert_eq!(summary.not_purchased, 1);
    }

    #[test]
    fn status_filter_is_exact() {
        let state = FilterState {
            status: Some(ItemStatus::NotPurchased),
            ..Default::default()
        };
        let filtered = filter(base_inventory(), &state);
        assert_eq!(skus(&filtered), vec!["SAP-1002", "SAP-1004"]);
    }

    #[test]
    fn combined_filters_intersect() {
        let state = FilterState {
            search: "pack".into(),
            vendor: Some("CarePlus".into()),
            status: Some(ItemStatus::Available),
            ..Default::default()
        };
        let filtered = filter(base_inventory(), &state);
        assert!(filtered.is_empty());
    }

    #[test]
    fn summary_counts_always_balance() {
        let states = [
            FilterState::default(),
            FilterState {
                search: "a".into(),
                ..Default::default()
            },
            FilterState {
                vendor: Some("MedLife".into()),
                ..Default::default()
            },
            FilterState {
                status: Some(ItemStatus::Available),
                ..Default::default()
            },
            FilterState {
                search: "zzz".into(),
                ..Default::default()
            },
        ];
        for state in states {
            let filtered = filter(base_inventory(), &state);
            let summary = summarize(&filtered);
            assert_eq!(summary.total, summary.available + summary.not_purchased);
            assert!(summary.total <= base_inventory().len());
        }
    }

    #[test]
    fn vendors_are_distinct_and_in_first_appearance_order() {
        let vendors = vendors(base_inventory());
        assert_eq!(vendors, vec!["MedLife", "CarePlus", "CleanPro", "TechMed"]);
    }

    #[test]
    fn vendor_counts_sum_to_filtered_total() {
        let all_vendors = vendors(base_inventory());
        let states = [
            FilterState::default(),
            FilterState {
                vendor: Some("CarePlus".into()),
                ..Default::default()
            },
            FilterState {
                search: "scanner".into(),
                ..Default::default()
            },
        ];
        for state in states {
            let filtered = filter(base_inventory(), &state);
            let counts = vendor_counts(&all_vendors, &filtered);
            assert_eq!(counts.len(), 4);
            let sum: usize = counts.iter().map(|(_, n)| n).sum();
            assert_eq!(sum, filtered.len());
        }
    }
}
