//! Product search command.

use anyhow::{anyhow, bail, Result};
use storefront_catalog::catalog::Product;
use storefront_catalog::money::{Currency, Money};
use storefront_catalog::search::{Filter, SearchQuery, SortOption};

use super::SearchArgs;
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let per_page = args.per_page.unwrap_or(ctx.config.output.default_per_page);
    let query = build_query(&args, per_page)?;

    let catalog = ctx.catalog()?;
    let results = catalog.search(&query);

    if ctx.output.is_json() {
        ctx.output.json(&results);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Search results ({})",
        query.sort.display_name()
    ));

    if results.is_empty() {
        ctx.output.info("No products match.");
    } else {
        let items: Vec<&Product> = results.items.iter().collect();
        ctx.output.products(&items);
    }

    let p = &results.pagination;
    ctx.output.info("");
    ctx.output.info(&format!(
        "Showing {}-{} of {} (page {} of {})",
        p.start_item(),
        p.end_item(),
        p.total,
        p.page,
        p.total_pages
    ));

    for facet in &results.facets {
        ctx.output.header(&facet.name);
        for value in &facet.values {
            let marker = if value.selected { " *" } else { "" };
            ctx.output
                .list_item(&format!("{} ({}){}", value.value, value.count, marker));
        }
    }

    Ok(())
}

/// Translate command-line flags into a query.
fn build_query(args: &SearchArgs, per_page: i64) -> Result<SearchQuery> {
    let sort = SortOption::from_key(&args.sort).ok_or_else(|| {
        let keys: Vec<&str> = SortOption::ALL.iter().map(SortOption::key).collect();
        anyhow!("Unknown sort '{}'. Expected one of: {}", args.sort, keys.join(", "))
    })?;

    if let (Some(min), Some(max)) = (args.min_price, args.max_price) {
        if min > max {
            bail!("--min-price {} is above --max-price {}", min, max);
        }
    }

    let mut query = SearchQuery::new()
        .with_sort(sort)
        .with_pagination(args.page, per_page)
        .with_facets();

    if let Some(text) = &args.query {
        query = query.with_query(text.as_str());
    }
    if let Some(category) = &args.category {
        query = query.with_filter(Filter::category(category.as_str()));
    }
    if !args.color.is_empty() {
        query = query.with_filter(Filter::Colors(args.color.clone()));
    }
    if !args.size.is_empty() {
        query = query.with_filter(Filter::Sizes(args.size.clone()));
    }
    if args.min_price.is_some() || args.max_price.is_some() {
        let dollars = |v: f64| Money::from_decimal(v, Currency::USD);
        query = query.with_filter(Filter::price_range(
            args.min_price.map(dollars),
            args.max_price.map(dollars),
        ));
    }
    if args.in_stock {
        query = query.with_filter(Filter::in_stock());
    }

    Ok(query)
}
