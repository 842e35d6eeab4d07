use crate::core::params::{Pagination, MAX_PAGE_LIMIT};
use crate::domain::model::Collection;
use crate::domain::ports::PageSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_range;

type ItemOf<S> = <<S as PageSource>::Page as Collection>::Item;

/// Reads every page of a list endpoint.
///
/// Stops once `total_entries` items were received. When the server omits
/// the count, a short or empty page ends the walk instead.
pub async fn fetch_all<S: PageSource>(source: &S, page_size: u32) -> Result<Vec<ItemOf<S>>> {
    validate_range("page_size", page_size, 1, MAX_PAGE_LIMIT)?;

    let mut items = Vec::new();
    let mut offset: u32 = 0;

    loop {
        let page = source
            .fetch_page(Pagination::page(page_size, offset))
            .await?;
        let total = page.total_entries();
        let batch = page.into_items();
        let received = batch.len();

        tracing::debug!(
            "Fetched page at offset {} ({} items, total {:?})",
            offset,
            received,
            total
        );

        items.extend(batch);
        offset = offset.saturating_add(received as u32);

        let done = match total {
            Some(total) => received == 0 || items.len() >= total.max(0) as usize,
            None => received < page_size as usize,
        };
        if done {
            break;
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Pool, PoolCollection};
    use crate::utils::error::ClientError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// 以記憶體中的資料模擬分頁端點
    struct FakePools {
        pools: Vec<Pool>,
        report_total: bool,
        requests: Mutex<Vec<Pagination>>,
    }

    impl FakePools {
        fn new(count: usize, report_total: bool) -> Self {
            Self {
                pools: (0..count)
                    .map(|i| Pool::new(format!("pool_{}", i), 1))
                    .collect(),
                report_total,
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PageSource for FakePools {
        type Page = PoolCollection;

        async fn fetch_page(&self, page: Pagination) -> Result<PoolCollection> {
            self.requests.lock().unwrap().push(page);
            let offset = page.offset.unwrap_or(0) as usize;
            let limit = page.limit.unwrap_or(100) as usize;
            let slice: Vec<Pool> = self.pools.iter().skip(offset).take(limit).cloned().collect();

            let collection = PoolCollection::new(slice);
            Ok(if self.report_total {
                collection.with_total_entries(self.pools.len() as i32)
            } else {
                collection
            })
        }
    }

    #[test]
    fn test_fetch_all_follows_total_entries() {
        let source = FakePools::new(7, true);
        let pools = tokio_test::block_on(fetch_all(&source, 3)).unwrap();

        assert_eq!(pools.len(), 7);
        assert_eq!(pools[6].name.as_deref(), Some("pool_6"));

        let requests = source.requests.lock().unwrap();
        let offsets: Vec<u32> = requests.iter().map(|p| p.offset.unwrap()).collect();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[test]
    fn test_fetch_all_without_total_stops_on_short_page() {
        let source = FakePools::new(4, false);
        let pools = tokio_test::block_on(fetch_all(&source, 2)).unwrap();

        assert_eq!(pools.len(), 4);
        // 最後一次請求回傳空頁
        assert_eq!(source.requests.lock().unwrap().len(), 3);
    }

    #[test]
    fn test_fetch_all_rejects_oversized_pages() {
        let source = FakePools::new(1, true);
        let err = tokio_test::block_on(fetch_all(&source, 500)).unwrap_err();

        assert!(matches!(err, ClientError::InvalidConfigValueError { .. }));
        assert!(source.requests.lock().unwrap().is_empty());
    }
}
