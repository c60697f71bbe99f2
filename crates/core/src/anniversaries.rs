//! Anniversary model and repository contract.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::scope::{AssignedKey, UserScope};

/// A yearly recurring date worth a reminder, optionally tied to a friend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Anniversary {
    /// Store-assigned key; empty until the anniversary has been persisted.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub key: String,
    pub title: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub memo: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub friend_key: Option<String>,
}

impl Anniversary {
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            key: String::new(),
            title: title.into(),
            date,
            memo: String::new(),
            friend_key: None,
        }
    }

    /// Next calendar occurrence on or after `today`. A February 29th
    /// anniversary falls on March 1st in non-leap years.
    pub fn next_occurrence(&self, today: NaiveDate) -> NaiveDate {
        let mut year = today.year();
        loop {
            let candidate = NaiveDate::from_ymd_opt(year, self.date.month(), self.date.day())
                .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1));
            match candidate {
                Some(date) if date >= today => return date,
                _ => year += 1,
            }
        }
    }

    pub fn days_until(&self, today: NaiveDate) -> i64 {
        (self.next_occurrence(today) - today).num_days()
    }
}

/// Anniversaries whose next occurrence falls within `days` of `today`,
/// soonest first.
pub fn upcoming_within(
    anniversaries: &[Anniversary],
    today: NaiveDate,
    days: i64,
) -> Vec<Anniversary> {
    let mut upcoming: Vec<Anniversary> = anniversaries
        .iter()
        .filter(|a| a.days_until(today) <= days)
        .cloned()
        .collect();
    upcoming.sort_by_key(|a| a.days_until(today));
    upcoming
}

/// Store operations for the anniversary collection.
#[async_trait]
pub trait AnniversaryRepositoryTrait: Send + Sync {
    async fn load_anniversaries(&self, scope: &UserScope) -> Result<Vec<Anniversary>>;

    /// Anniversaries due within `days` of `today`, soonest first.
    async fn load_upcoming(
        &self,
        scope: &UserScope,
        today: NaiveDate,
        days: i64,
    ) -> Result<Vec<Anniversary>>;

    async fn insert_anniversary(
        &self,
        scope: &UserScope,
        anniversary: Anniversary,
    ) -> Result<AssignedKey>;

    async fn update_anniversary(
        &self,
        scope: &UserScope,
        key: &str,
        anniversary: Anniversary,
    ) -> Result<()>;

    async fn delete_anniversary(&self, scope: &UserScope, key: &str) -> Result<()>;

    async fn repair_anniversary_key(&self, scope: &UserScope, key: &str) -> Result<()>;
}
