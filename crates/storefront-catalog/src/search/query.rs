//! Search query builder.

use crate::catalog::Product;
use crate::search::{Facet, Filter, Pagination, SearchResults};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort options for search results.
///
/// All sorts are stable, so ties keep catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by name A-Z.
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// New products first.
    Newest,
    /// Sort by highest rated.
    Rating,
    /// Sort by review count.
    BestSelling,
}

impl SortOption {
    /// All options, in menu order.
    pub const ALL: [SortOption; 8] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::NameAsc,
        SortOption::NameDesc,
        SortOption::Newest,
        SortOption::Rating,
        SortOption::BestSelling,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Featured",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::NameAsc => "Name: A-Z",
            SortOption::NameDesc => "Name: Z-A",
            SortOption::Newest => "Newest",
            SortOption::Rating => "Highest Rated",
            SortOption::BestSelling => "Best Selling",
        }
    }

    /// Short key used on the command line, e.g. `price-asc`.
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-asc",
            SortOption::PriceDesc => "price-desc",
            SortOption::NameAsc => "name-asc",
            SortOption::NameDesc => "name-desc",
            SortOption::Newest => "newest",
            SortOption::Rating => "rating",
            SortOption::BestSelling => "best-selling",
        }
    }

    /// Parse a key produced by [`key`](SortOption::key).
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.key() == key)
    }

    /// Compare two products under this ordering.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOption::Featured => Ordering::Equal,
            SortOption::PriceAsc => a.price.amount_cents.cmp(&b.price.amount_cents),
            SortOption::PriceDesc => b.price.amount_cents.cmp(&a.price.amount_cents),
            SortOption::NameAsc => a.name.cmp(&b.name),
            SortOption::NameDesc => b.name.cmp(&a.name),
            SortOption::Newest => b.is_new.cmp(&a.is_new),
            SortOption::Rating => b.rating.total_cmp(&a.rating),
            SortOption::BestSelling => b.review_count.cmp(&a.review_count),
        }
    }
}

/// A search query.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Text query (for full-text search).
    pub query: Option<String>,
    /// Filters to apply; all must match.
    pub filters: Vec<Filter>,
    /// Sort option.
    pub sort: SortOption,
    /// Current page (1-indexed).
    pub page: i64,
    /// Items per page.
    pub per_page: i64,
    /// Whether to include facets in results.
    pub include_facets: bool,
}

impl SearchQuery {
    /// Create a new search query.
    pub fn new() -> Self {
        Self {
            query: None,
            filters: Vec::new(),
            sort: SortOption::Featured,
            page: 1,
            per_page: 24,
            include_facets: false,
        }
    }

    /// Set the text query.
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        let q = q.into();
        if !q.is_empty() {
            self.query = Some(q.clone());
            self.filters.push(Filter::Text(q));
        }
        self
    }

    /// Add a filter.
    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Set pagination.
    pub fn with_pagination(mut self, page: i64, per_page: i64) -> Self {
        self.page = page.max(1);
        self.per_page = per_page.clamp(1, 100);
        self
    }

    /// Enable facets.
    pub fn with_facets(mut self) -> Self {
        self.include_facets = true;
        self
    }

    /// Number of items skipped before the current page.
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1) * self.per_page.max(1)
    }

    /// Check whether a product passes every filter.
    pub fn matches(&self, product: &Product) -> bool {
        self.filters.iter().all(|filter| filter.matches(product))
    }

    /// Filter and sort products, before pagination.
    pub fn apply<'a>(&self, products: &'a [Product]) -> Vec<&'a Product> {
        let mut matched: Vec<&Product> = products.iter().filter(|p| self.matches(p)).collect();
        matched.sort_by(|a, b| self.sort.compare(a, b));
        matched
    }

    /// Run the query: filter, sort, paginate and optionally facet.
    pub fn execute(&self, products: &[Product]) -> SearchResults<Product> {
        let matched = self.apply(products);
        let per_page = self.per_page.max(1);
        let pagination = Pagination::new(self.page.max(1), per_page, matched.len() as i64);

        let items = matched
            .iter()
            .skip(pagination.offset() as usize)
            .take(per_page as usize)
            .map(|p| (*p).clone())
            .collect();

        let results = SearchResults::new(items, pagination);
        if !self.include_facets {
            return results;
        }
        results.with_facets(self.facets(&matched))
    }

    fn facets(&self, matched: &[&Product]) -> Vec<Facet> {
        let mut categories = Vec::new();
        let mut colors = Vec::new();
        let mut sizes = Vec::new();
        for filter in &self.filters {
            match filter {
                Filter::Category(c) => categories.push(c.clone()),
                Filter::Colors(cs) => colors.extend(cs.iter().cloned()),
                Filter::Sizes(ss) => sizes.extend(ss.iter().cloned()),
                _ => {}
            }
        }

        vec![
            Facet::count_terms(
                "Category",
                "category",
                matched.iter().map(|p| p.category.as_str()),
                &categories,
            ),
            Facet::count_terms(
                "Color",
                "color",
                matched.iter().map(|p| p.color.as_str()),
                &colors,
            ),
            Facet::count_terms(
                "Size",
                "size",
                matched.iter().flat_map(|p| p.sizes.iter().map(String::as_str)),
                &sizes,
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductOptions;
    use crate::generator::{ProductFactory, ProductShell};
    use crate::money::Money;

    fn catalog() -> Vec<Product> {
        let factory = ProductFactory::default();
        let rows = [
            ("Wool Coat", "Women", "Outerwear", 24990, true),
            ("Silk Blouse", "Women", "Tops", 9990, false),
            ("Oxford Shirt", "Men", "Shirts", 5990, true),
            ("Party Dress", "Kids", "Girls Dresses", 3990, false),
        ];
        rows.iter()
            .enumerate()
            .flat_map(|(i, (name, category, subcategory, cents, is_new))| {
                let shell = ProductShell {
                    base_id: format!("{}-{}", category.to_lowercase(), i + 1),
                    name: name.to_string(),
                    category: category.to_string(),
                    subcategory: subcategory.to_string(),
                    price: Money::usd(*cents),
                    original_price: None,
                    colors: vec!["Black".to_string(), "Navy".to_string()],
                    sizes: vec!["M".to_string()],
                };
                let options = ProductOptions {
                    is_new: *is_new,
                    ..Default::default()
                };
                factory.variants(&shell, &options)
            })
            .collect()
    }

    #[test]
    fn test_execute_filters_and_sorts() {
        let products = catalog();
        let results = SearchQuery::new()
            .with_filter(Filter::category("Women"))
            .with_filter(Filter::color("Black"))
            .with_sort(SortOption::PriceAsc)
            .execute(&products);

        let names: Vec<&str> = results.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Silk Blouse", "Wool Coat"]);
        assert_eq!(results.pagination.total, 2);
    }

    #[test]
    fn test_sorting_is_stable() {
        let products = catalog();
        let sorted = SearchQuery::new()
            .with_sort(SortOption::Newest)
            .apply(&products);
        let ids: Vec<&str> = sorted.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "women-1", "women-1-navy", "men-3", "men-3-navy",
                "women-2", "women-2-navy", "kids-4", "kids-4-navy",
            ]
        );
    }

    #[test]
    fn test_execute_paginates() {
        let products = catalog();
        let results = SearchQuery::new()
            .with_sort(SortOption::NameAsc)
            .with_pagination(2, 3)
            .execute(&products);
        assert_eq!(results.len(), 3);
        assert_eq!(results.pagination.total_pages, 3);
        assert_eq!(results.items[0].name, "Party Dress");

        let past_end = SearchQuery::new().with_pagination(10, 3).execute(&products);
        assert!(past_end.is_empty());
    }

    #[test]
    fn test_execute_facets() {
        let products = catalog();
        let results = SearchQuery::new()
            .with_filter(Filter::category("Women"))
            .with_facets()
            .execute(&products);

        let category = results.facet("category").unwrap();
        assert_eq!(category.count_of("Women"), 4);
        assert!(category.values[0].selected);
        assert_eq!(results.facet("color").unwrap().count_of("Navy"), 2);
        assert_eq!(results.facet("size").unwrap().count_of("M"), 4);

        let plain = SearchQuery::new().execute(&products);
        assert!(plain.facets.is_empty());
    }

    #[test]
    fn test_query_builder() {
        let query = SearchQuery::new()
            .with_query("coat")
            .with_filter(Filter::in_stock())
            .with_sort(SortOption::PriceAsc)
            .with_pagination(2, 10);

        assert_eq!(query.page, 2);
        assert_eq!(query.per_page, 10);
        assert_eq!(query.offset(), 10);
        assert_eq!(query.sort, SortOption::PriceAsc);
        assert_eq!(query.filters.len(), 2);
    }

    #[test]
    fn test_pagination_clamped() {
        let query = SearchQuery::new().with_pagination(0, 500);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 100);

        let query = SearchQuery::new().with_pagination(-3, 0);
        assert_eq!(query.page, 1);
        assert_eq!(query.per_page, 1);
    }

    #[test]
    fn test_empty_text_query_adds_no_filter() {
        let query = SearchQuery::new().with_query("");
        assert!(query.query.is_none());
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_sort_keys_round_trip() {
        for sort in SortOption::ALL {
            assert_eq!(SortOption::from_key(sort.key()), Some(sort));
        }
        assert_eq!(SortOption::from_key("cheapest"), None);
        assert_eq!(SortOption::default().display_name(), "Featured");
    }
}
