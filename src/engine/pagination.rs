// src/engine/pagination.rs

/// Returns the `page`-th slice (1-based) of `items`, `page_size` long.
///
/// Pages past the end and pages below 1 both yield an empty slice.
pub fn paginate<T>(items: &[T], page: i64, page_size: usize) -> &[T] {
    if page < 1 || page_size == 0 {
        return &[];
    }

    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_size))
        .unwrap_or(usize::MAX);
    if start >= items.len() {
        return &[];
    }

    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
