use crate::domain::models::catalog::CatalogItem;

/// Case-insensitive catalog search. Name matches rank ahead of matches
/// that only hit the category or description; order is otherwise stable.
pub fn search_catalog<'a>(items: &'a [CatalogItem], query: &str) -> Vec<&'a CatalogItem> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let mut name_hits = Vec::new();
    let mut other_hits = Vec::new();

    for item in items {
        if item.name.to_lowercase().contains(&needle) {
            name_hits.push(item);
        } else if item.category.to_lowercase().contains(&needle)
            || item
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
        {
            other_hits.push(item);
        }
    }

    name_hits.extend(other_hits);
    name_hits
}
