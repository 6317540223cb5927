//! Search results and pagination.

use serde::{Deserialize, Serialize};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Total number of items.
    pub total: i64,
    /// Total number of pages.
    pub total_pages: i64,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            (total + per_page - 1) / per_page
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Number of items skipped before this page.
    pub fn offset(&self) -> i64 {
        (self.page - 1) * self.per_page
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> i64 {
        if self.total == 0 || self.offset() >= self.total {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> i64 {
        (self.page * self.per_page).min(self.total)
    }
}

/// Search results container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults<T> {
    /// The result items.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
    /// Facets (if requested).
    pub facets: Vec<Facet>,
}

impl<T> SearchResults<T> {
    /// Create new search results.
    pub fn new(items: Vec<T>, pagination: Pagination) -> Self {
        Self {
            items,
            pagination,
            facets: Vec::new(),
        }
    }

    /// Set facets.
    pub fn with_facets(mut self, facets: Vec<Facet>) -> Self {
        self.facets = facets;
        self
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Look up a facet by field.
    pub fn facet(&self, field: &str) -> Option<&Facet> {
        self.facets.iter().find(|f| f.field == field)
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Category", "Color").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    /// Create a new terms facet.
    pub fn terms(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(&mut self, value: impl Into<String>, count: i64, selected: bool) {
        self.values.push(FacetValue {
            value: value.into(),
            count,
            selected,
        });
    }

    /// Count each term, keeping first-seen order.
    pub fn count_terms<'a>(
        name: impl Into<String>,
        field: impl Into<String>,
        terms: impl IntoIterator<Item = &'a str>,
        selected: &[String],
    ) -> Self {
        let mut facet = Self::terms(name, field);
        for term in terms {
            match facet.values.iter_mut().find(|v| v.value == term) {
                Some(value) => value.count += 1,
                None => {
                    let is_selected = selected.iter().any(|s| s.eq_ignore_ascii_case(term));
                    facet.add_value(term, 1, is_selected);
                }
            }
        }
        facet
    }

    /// Count for a value, zero when absent.
    pub fn count_of(&self, value: &str) -> i64 {
        self.values
            .iter()
            .find(|v| v.value == value)
            .map_or(0, |v| v.count)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of items with this value.
    pub count: i64,
    /// Whether currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basics() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_last_page() {
        let p = Pagination::new(5, 10, 45);
        assert!(p.has_prev);
        assert!(!p.has_next);
        assert_eq!(p.start_item(), 41);
        assert_eq!(p.end_item(), 45);
    }

    #[test]
    fn test_pagination_past_end() {
        let p = Pagination::new(9, 10, 45);
        assert_eq!(p.start_item(), 0);
        assert_eq!(p.end_item(), 45);
        assert!(!p.has_next);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 24, 0);
        assert_eq!(p.total_pages, 1);
        assert_eq!(p.start_item(), 0);
        assert!(!p.has_next && !p.has_prev);
    }

    #[test]
    fn test_count_terms() {
        let facet = Facet::count_terms(
            "Color",
            "color",
            ["Black", "Navy", "Black"],
            &["navy".to_string()],
        );
        assert_eq!(facet.values.len(), 2);
        assert_eq!(facet.count_of("Black"), 2);
        assert_eq!(facet.count_of("Gray"), 0);
        assert!(facet.values[1].selected);
        assert!(!facet.values[0].selected);
    }

    #[test]
    fn test_search_results() {
        let results = SearchResults::new(vec![1, 2, 3], Pagination::new(1, 10, 3));
        assert_eq!(results.len(), 3);
        assert!(!results.is_empty());
        assert!(results.facet("color").is_none());
    }
}
