//! Reviews commands

use storefront::{Client, ReviewResponse, ReviewStatistics};
use tabled::Tabled;

use crate::{output::{cell, OutputFormat}, ReviewCommands};

#[derive(Tabled)]
struct BucketRow {
    stars: u8,
    count: u64,
}

fn buckets(stats: &ReviewStatistics) -> Vec<BucketRow> {
    (1..=5u8)
        .rev()
        .map(|stars| BucketRow {
            stars,
            count: stats.rating_counts.get(&stars).copied().unwrap_or(0),
        })
        .collect()
}

#[derive(Tabled)]
struct ReviewRow {
    id: String,
    reviewer: String,
    rating: u8,
    comment: String,
}

impl From<&ReviewResponse> for ReviewRow {
    fn from(r: &ReviewResponse) -> Self {
        Self {
            id: r.id.clone(),
            reviewer: cell(r.reviewer.full_name.as_deref()),
            rating: r.rating,
            comment: cell(r.comment.as_deref()),
        }
    }
}

pub async fn handle(action: ReviewCommands, client: &Client, format: OutputFormat) -> anyhow::Result<()> {
    match action {
        ReviewCommands::Stats { version_id } => {
            let stats = client.reviews().statistics(&version_id).await?;
            format.print(&stats, buckets);
            if format == OutputFormat::Table {
                println!("average {:.2} over {} reviews", stats.average_rating, stats.total_reviews);
            }
        }
        ReviewCommands::List { version_id, page, size } => {
            let reviews = client
                .reviews()
                .list(&version_id, super::page(page, size, None))
                .await?;
            format.print(&reviews, |p| p.items.iter().map(ReviewRow::from).collect());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buckets_fill_missing_stars() {
        let stats = ReviewStatistics::from_ratings([5, 5, 2]);
        let rows = buckets(&stats);
        assert_eq!(rows.len(), 5);
        assert_eq!((rows[0].stars, rows[0].count), (5, 2));
        assert_eq!((rows[3].stars, rows[3].count), (2, 1));
        assert_eq!(rows[4].count, 0);
    }
}
