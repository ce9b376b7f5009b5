use std::future::Future;

use log::warn;

use crate::error::Result;

/// Collects up to `limit` records starting at `offset`, one page at a time.
///
/// `fetch_page(offset, step)` must return at most `step` records starting at
/// `offset`. Each call asks for `min(limit - fetched, page_size)` records at
/// `offset + fetched`. A page shorter than requested marks the end of the
/// upstream data and stops the loop, so the result may be shorter than
/// `limit`. Any page error aborts the whole collection.
pub async fn collect_pages<T, F, Fut>(
    offset: usize,
    limit: usize,
    page_size: usize,
    mut fetch_page: F,
) -> Result<Vec<T>>
where
    F: FnMut(usize, usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let page_size = page_size.max(1);
    let mut records: Vec<T> = vec![];
    let mut fetched = 0usize;

    while fetched < limit {
        let step = (limit - fetched).min(page_size);
        let mut page = fetch_page(offset.saturating_add(fetched), step).await?;

        if page.len() > step {
            warn!(
                "Upstream returned {} records for a page of {}, dropping the excess",
                page.len(),
                step
            );
            page.truncate(step);
        }

        let received = page.len();
        fetched += received;
        records.extend(page);

        if received < step {
            break;
        }
    }

    Ok(records)
}
