//! Sales Aggregator
//!
//! Folds raw download+price rows into a per-day sales report for one
//! seller. Nothing here is cached or persisted; every call recomputes
//! from raw rows.
//!
//! `totals` follows the product's established definition of `total_price`:
//! the sum of list prices across the seller's whole catalog, independent
//! of actual downloads. It is a "potential revenue" figure, not realized
//! revenue.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use kernel::id::UserId;
use rust_decimal::Decimal;

use crate::domain::repository::{DownloadRepository, ProductRepository, SaleRecord};
use crate::error::MarketplaceResult;

/// Trailing report window in calendar days
pub const WINDOW_DAYS: i64 = 30;

/// One calendar day of the report. Derived on demand, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailySalesBucket {
    /// UTC calendar day
    pub date: NaiveDate,
    /// Download events on that day
    pub downloads: i64,
    /// Sum of downloaded products' list prices on that day
    pub revenue: Decimal,
}

/// Window totals for one seller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalesTotals {
    /// Download events in the trailing window
    pub downloads_count: i64,
    /// Sum of list prices across the seller's whole catalog
    pub total_price: Decimal,
}

/// Sales use case
pub struct SalesUseCase<P, D>
where
    P: ProductRepository,
    D: DownloadRepository,
{
    products: Arc<P>,
    downloads: Arc<D>,
}

impl<P, D> SalesUseCase<P, D>
where
    P: ProductRepository + Sync,
    D: DownloadRepository + Sync,
{
    pub fn new(products: Arc<P>, downloads: Arc<D>) -> Self {
        Self { products, downloads }
    }

    /// Per-day series for the trailing window ending today (UTC), one
    /// entry per calendar day, zero-filled, ascending.
    pub async fn daily_series(&self, seller: UserId) -> MarketplaceResult<Vec<DailySalesBucket>> {
        let today = Utc::now().date_naive();
        let start = today - Duration::days(WINDOW_DAYS - 1);
        let since = start.and_time(NaiveTime::MIN).and_utc();

        let records = self.downloads.sales_for_seller_since(&seller, since).await?;

        Ok(bucket_daily(today, WINDOW_DAYS, &records))
    }

    /// Window download count plus whole-catalog price total.
    pub async fn totals(&self, seller: UserId) -> MarketplaceResult<SalesTotals> {
        let since = Utc::now() - Duration::days(WINDOW_DAYS);

        let downloads_count = self.downloads.count_for_seller_since(&seller, since).await?;
        let total_price = self.products.sum_price_by_seller(&seller).await?;

        Ok(SalesTotals {
            downloads_count,
            total_price,
        })
    }
}

/// Fold raw sale records into exactly `window_days` contiguous daily
/// buckets ending at `today`, ascending, with zero-filled gaps.
///
/// Records outside the window are ignored, so callers may over-fetch.
pub fn bucket_daily(
    today: NaiveDate,
    window_days: i64,
    records: &[SaleRecord],
) -> Vec<DailySalesBucket> {
    let mut by_day: HashMap<NaiveDate, (i64, Decimal)> = HashMap::new();
    for record in records {
        let day = record.downloaded_at.date_naive();
        let entry = by_day.entry(day).or_insert((0, Decimal::ZERO));
        entry.0 += 1;
        entry.1 += record.price;
    }

    let start = today - Duration::days(window_days - 1);
    (0..window_days)
        .map(|offset| {
            let date = start + Duration::days(offset);
            let (downloads, revenue) =
                by_day.get(&date).copied().unwrap_or((0, Decimal::ZERO));
            DailySalesBucket {
                date,
                downloads,
                revenue,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn record(days_ago: i64, price: &str) -> SaleRecord {
        let downloaded_at: DateTime<Utc> = Utc::now() - Duration::days(days_ago);
        SaleRecord {
            downloaded_at,
            price: price.parse().unwrap(),
        }
    }

    #[test]
    fn test_empty_window_is_fully_zero_filled() {
        let today = Utc::now().date_naive();
        let buckets = bucket_daily(today, WINDOW_DAYS, &[]);

        assert_eq!(buckets.len(), 30);
        assert_eq!(buckets.last().unwrap().date, today);
        assert!(buckets.iter().all(|b| b.downloads == 0));
        assert!(buckets.iter().all(|b| b.revenue == Decimal::ZERO));
    }

    #[test]
    fn test_dates_are_contiguous_ascending_ending_today() {
        let today = Utc::now().date_naive();
        let buckets = bucket_daily(today, WINDOW_DAYS, &[]);

        for (i, pair) in buckets.windows(2).enumerate() {
            assert_eq!(
                pair[1].date - pair[0].date,
                Duration::days(1),
                "gap at index {i}"
            );
        }
        assert_eq!(buckets[0].date, today - Duration::days(29));
        assert_eq!(buckets[29].date, today);
    }

    #[test]
    fn test_single_download_lands_in_its_day_only() {
        let today = Utc::now().date_naive();
        let buckets = bucket_daily(today, WINDOW_DAYS, &[record(3, "19.99")]);

        let target = today - Duration::days(3);
        for bucket in &buckets {
            if bucket.date == target {
                assert_eq!(bucket.downloads, 1);
                assert_eq!(bucket.revenue, "19.99".parse().unwrap());
            } else {
                assert_eq!(bucket.downloads, 0);
                assert_eq!(bucket.revenue, Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_same_day_downloads_accumulate_exactly() {
        let today = Utc::now().date_naive();
        let records = [record(5, "0.10"), record(5, "0.20"), record(5, "19.99")];
        let buckets = bucket_daily(today, WINDOW_DAYS, &records);

        let bucket = buckets
            .iter()
            .find(|b| b.date == today - Duration::days(5))
            .unwrap();
        assert_eq!(bucket.downloads, 3);
        // Decimal accumulation: no binary float drift on 0.10 + 0.20
        assert_eq!(bucket.revenue, "20.29".parse().unwrap());
    }

    #[test]
    fn test_records_outside_window_are_ignored() {
        let today = Utc::now().date_naive();
        let buckets = bucket_daily(today, WINDOW_DAYS, &[record(45, "100.00")]);

        assert!(buckets.iter().all(|b| b.downloads == 0));
    }
}
