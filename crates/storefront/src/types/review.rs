use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::timestamp;
use crate::validate::{self, ContractError, Validate};

/// Allowed drift between the reported average and the bucket average
const AVERAGE_TOLERANCE: f64 = 0.01;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: String,
    pub product_version_id: String,
    pub reviewer: Reviewer,
    pub rating: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub modified_at: DateTime<Utc>,
}

impl Validate for ReviewResponse {
    fn validate(&self) -> Result<(), ContractError> {
        validate::rating("review", self.rating)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewRequest {
    pub product_version_id: String,
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Validate for ReviewRequest {
    fn validate(&self) -> Result<(), ContractError> {
        validate::rating("review", self.rating)
    }
}

/// Per-star counts and their average for one product version
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewStatistics {
    pub total_reviews: u64,
    pub average_rating: f64,
    /// Star value (1..=5) to review count
    #[serde(default)]
    pub rating_counts: BTreeMap<u8, u64>,
}

impl ReviewStatistics {
    /// Build statistics from individual ratings
    pub fn from_ratings(ratings: impl IntoIterator<Item = u8>) -> Self {
        let mut rating_counts = BTreeMap::new();
        for rating in ratings {
            *rating_counts.entry(rating).or_insert(0) += 1;
        }
        let mut stats = Self {
            rating_counts,
            ..Default::default()
        };
        stats.total_reviews = stats.bucket_total();
        stats.average_rating = stats.bucket_average();
        stats
    }

    pub fn bucket_total(&self) -> u64 {
        self.rating_counts.values().sum()
    }

    /// Average recomputed from the buckets, 0 when there are none
    pub fn bucket_average(&self) -> f64 {
        let total = self.bucket_total();
        if total == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .rating_counts
            .iter()
            .map(|(star, count)| u64::from(*star) * count)
            .sum();
        weighted as f64 / total as f64
    }
}

impl Validate for ReviewStatistics {
    fn validate(&self) -> Result<(), ContractError> {
        if let Some(star) = self.rating_counts.keys().find(|star| !(1..=5).contains(*star)) {
            return Err(ContractError::new(
                "reviewStatistics",
                "ratingCounts",
                format!("unknown bucket {star}"),
            ));
        }
        let total = self.bucket_total();
        if total != self.total_reviews {
            return Err(ContractError::new(
                "reviewStatistics",
                "totalReviews",
                format!("{} reported, buckets sum to {total}", self.total_reviews),
            ));
        }
        let expected = self.bucket_average();
        if (expected - self.average_rating).abs() > AVERAGE_TOLERANCE {
            return Err(ContractError::new(
                "reviewStatistics",
                "averageRating",
                format!("{} reported, buckets give {expected:.2}", self.average_rating),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_statistics_from_ratings() {
        let stats = ReviewStatistics::from_ratings([5, 5, 4, 3, 5]);
        assert_eq!(stats.total_reviews, 5);
        assert_eq!(stats.rating_counts.get(&5), Some(&3));
        assert!((stats.average_rating - 4.4).abs() < f64::EPSILON);
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_statistics_wire_shape() {
        let stats: ReviewStatistics = serde_json::from_value(json!({
            "totalReviews": 3,
            "averageRating": 3.67,
            "ratingCounts": { "5": 1, "4": 1, "2": 1 }
        }))
        .unwrap();
        assert_eq!(stats.rating_counts.len(), 3);
        assert!(stats.validate().is_ok());
    }

    #[test]
    fn test_inconsistent_statistics_are_flagged() {
        let mut stats = ReviewStatistics::from_ratings([1, 2]);
        stats.average_rating = 4.0;
        assert_eq!(stats.validate().unwrap_err().field, "averageRating");

        let mut stats = ReviewStatistics::from_ratings([4]);
        stats.total_reviews = 2;
        assert_eq!(stats.validate().unwrap_err().field, "totalReviews");

        let stats = ReviewStatistics::from_ratings([0]);
        assert_eq!(stats.validate().unwrap_err().field, "ratingCounts");
    }

    #[test]
    fn test_empty_statistics() {
        let stats = ReviewStatistics::default();
        assert_eq!(stats.bucket_average(), 0.0);
        assert!(stats.validate().is_ok());
    }
}
