//! Search, filter and summary views over a list of items.
use clap::ValueEnum;
use serde::Serialize;

use crate::Item;

/// Availability filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Availability {
    #[default]
    All,
    Available,
    Unavailable,
}

/// Combined text search, category and availability filter.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    /// Case-insensitive substring matched against name and description
    pub search: String,
    /// Exact category to keep, `None` for all categories
    pub category: Option<String>,
    pub availability: Availability,
}

impl ItemFilter {
    /// Whether any criterion narrows the list
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || self.category.is_some() || self.availability != Availability::All
    }

    pub fn matches(&self, item: &Item) -> bool {
        let term = self.search.to_lowercase();
        let matches_search = item.name.to_lowercase().contains(&term)
            || item.description.to_lowercase().contains(&term);

        let matches_category = self
            .category
            .as_ref()
            .map_or(true, |category| item.category == *category);

        let matches_availability = match self.availability {
            Availability::All => true,
            Availability::Available => item.is_available,
            Availability::Unavailable => !item.is_available,
        };

        matches_search && matches_category && matches_availability
    }

    /// Matching items, in input order
    pub fn apply(&self, items: &[Item]) -> Vec<Item> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .cloned()
            .collect()
    }
}

/// Distinct non-empty categories in order of first appearance.
pub fn categories(items: &[Item]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for item in items {
        if !item.category.is_empty() && !seen.contains(&item.category) {
            seen.push(item.category.clone());
        }
    }
    seen
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryStats {
    pub category: String,
    pub count: usize,
    /// Sum of `price * quantity`
    pub value: f64,
}

/// Totals shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InventoryStats {
    pub total_items: usize,
    pub total_available: usize,
    pub total_value: f64,
    /// One entry per category, in order of first appearance
    pub by_category: Vec<CategoryStats>,
}

impl InventoryStats {
    pub fn from_items(items: &[Item]) -> Self {
        let mut by_category: Vec<CategoryStats> = Vec::new();

        for item in items {
            let value = item.stock_value();
            match by_category.iter_mut().find(|s| s.category == item.category) {
                Some(stats) => {
                    stats.count += 1;
                    stats.value += value;
                }
                None => by_category.push(CategoryStats {
                    category: item.category.clone(),
                    count: 1,
                    value,
                }),
            }
        }

        Self {
            total_items: items.len(),
            total_available: items.iter().filter(|item| item.is_available).count(),
            total_value: items.iter().map(Item::stock_value).sum(),
            by_category,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ItemFields;

    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::new(
                ItemFields::new()
                    .name("Laptop")
                    .description("MacBook Pro")
                    .category("Electronics")
                    .quantity(2)
                    .price(1000.0),
            ),
            Item::new(
                ItemFields::new()
                    .name("Mug")
                    .description("Ceramic, holds coffee")
                    .category("Kitchen")
                    .quantity(10)
                    .price(2.5)
                    .available(false),
            ),
            Item::new(
                ItemFields::new()
                    .name("Mouse")
                    .category("Electronics")
                    .quantity(3)
                    .price(20.0),
            ),
            Item::new(ItemFields::new().name("Loose part").quantity(1).price(1.0)),
        ]
    }

    #[test]
    fn default_filter_keeps_everything() {
        let filter = ItemFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&items()).len(), 4);
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let filter = ItemFilter {
            search: "COFFEE".to_string(),
            ..Default::default()
        };
        let found = filter.apply(&items());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Mug");

        let filter = ItemFilter {
            search: "mac".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&items())[0].name, "Laptop");
    }

    #[test]
    fn filters_combine() {
        let filter = ItemFilter {
            search: "o".to_string(),
            category: Some("Electronics".to_string()),
            availability: Availability::Available,
        };
        assert!(filter.is_active());
        let names: Vec<String> = filter.apply(&items()).into_iter().map(|i| i.name).collect();
        assert_eq!(names, ["Laptop", "Mouse"]);

        let unavailable = ItemFilter {
            availability: Availability::Unavailable,
            ..Default::default()
        };
        assert_eq!(unavailable.apply(&items()).len(), 1);
    }

    #[test]
    fn categories_skip_empty_and_duplicates() {
        assert_eq!(categories(&items()), ["Electronics", "Kitchen"]);
    }

    #[test]
    fn stats_group_by_category() {
        let stats = InventoryStats::from_items(&items());
        assert_eq!(stats.total_items, 4);
        assert_eq!(stats.total_available, 3);
        assert_eq!(stats.total_value, 2086.0);

        assert_eq!(stats.by_category.len(), 3);
        assert_eq!(stats.by_category[0].category, "Electronics");
        assert_eq!(stats.by_category[0].count, 2);
        assert_eq!(stats.by_category[0].value, 2060.0);
        assert_eq!(stats.by_category[2].category, "");
    }

    #[test]
    fn stats_of_nothing() {
        let stats = InventoryStats::from_items(&[]);
        assert_eq!(stats.total_items, 0);
        assert_eq!(stats.total_value, 0.0);
        assert!(stats.by_category.is_empty());
    }
}
