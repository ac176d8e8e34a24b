use crate::error::IbError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two fixed buckets. Anything else is rejected at the boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BucketKey {
    General,
    Today,
}

impl BucketKey {
    pub const ALL: [BucketKey; 2] = [BucketKey::General, BucketKey::Today];

    /// The id this bucket always carries in the canonical bucket list.
    pub fn id(self) -> i64 {
        match self {
            BucketKey::General => 1,
            BucketKey::Today => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BucketKey::General => "general",
            BucketKey::Today => "today",
        }
    }

    pub fn from_id(id: i64) -> Option<Self> {
        BucketKey::ALL.into_iter().find(|key| key.id() == id)
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for BucketKey {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for BucketKey {
    type Err = IbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(BucketKey::General),
            "today" => Ok(BucketKey::Today),
            other => Err(IbError::UnknownBucket(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Bucket {
    pub id: i64,
    pub name: String,
}

impl Bucket {
    /// The bucket list every store starts from, and is reset to after a load.
    pub fn canonical() -> Vec<Bucket> {
        BucketKey::ALL
            .into_iter()
            .map(|key| Bucket {
                id: key.id(),
                name: key.as_str().to_string(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub id: i64,
    pub bucket_id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub creation_date: DateTime<Utc>,
    // Presence of a done date is the only "done" flag.
    #[serde(default)]
    pub done_date: Option<DateTime<Utc>>,
}

impl Item {
    pub fn new(id: i64, bucket_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            bucket_id,
            title: title.into(),
            description: None,
            creation_date: Utc::now(),
            done_date: None,
        }
    }

    pub fn is_done(&self) -> bool {
        self.done_date.is_some()
    }

    /// Pending -> Done stamps the current time; Done -> Pending clears it.
    pub fn toggle_done(&mut self) {
        self.done_date = match self.done_date {
            Some(_) => None,
            None => Some(Utc::now()),
        };
    }
}
