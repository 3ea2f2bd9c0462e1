use mongodb::{
    bson::{ doc, Document },
    Collection,
    Cursor,
};

pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Clamped (limit, page) pair shared by the query and whatever echoes the
/// pagination back to the client, so the two can never disagree.
/// `page` is 1-based; zero and missing values clamp to the minimums.
pub fn page_params(limit: Option<u32>, page: Option<u32>) -> (i64, i64) {
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1) as i64;
    let page = page.unwrap_or(1).max(1) as i64;

    (limit, page)
}

/// Documents to skip for a page. Saturates instead of overflowing when a
/// caller supplies extreme values.
pub fn page_skip(limit: i64, page: i64) -> u64 {
    limit.saturating_mul(page - 1) as u64
}

/// Newest-first page over any collection with a `created_at` field.
pub async fn find_page<T>(
    collection: &Collection<T>,
    filter: Document,
    limit: Option<u32>,
    page: Option<u32>,
) -> mongodb::error::Result<Cursor<T>>
where
    T: Unpin + Send + Sync,
{
    let (limit, page) = page_params(limit, page);

    collection
        .find(filter)
        .sort(doc! { "created_at": -1 })
        .limit(limit)
        .skip(page_skip(limit, page))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_params_defaults() {
        assert_eq!(page_params(None, None), (20, 1));
    }

    #[test]
    fn page_params_clamps_zero_to_minimums() {
        assert_eq!(page_params(Some(0), Some(0)), (1, 1));
    }

    #[test]
    fn page_params_passes_in_range_values_through() {
        assert_eq!(page_params(Some(50), Some(3)), (50, 3));
    }

    #[test]
    fn page_skip_counts_full_pages() {
        assert_eq!(page_skip(20, 1), 0);
        assert_eq!(page_skip(20, 3), 40);
    }

    #[test]
    fn page_skip_saturates_on_extreme_input() {
        let (limit, page) = page_params(Some(u32::MAX), Some(u32::MAX));
        assert_eq!(page_skip(limit, page), i64::MAX as u64);
    }
}
