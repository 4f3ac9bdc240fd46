//! Book model

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Book identifier, assigned by the repository
pub type BookId = u64;

/// Book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: f64,
    /// Creation timestamp, never modified after insert
    pub created_at: DateTime<Utc>,
}

/// Create book request
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateBook {
    pub title: String,
    pub author: String,
    pub price: f64,
}

/// Update book request
///
/// Absent fields are left untouched. A present field always overwrites,
/// including empty strings and zero. No book field is nullable, so an
/// explicit `null` is rejected rather than read as absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(default, deserialize_with = "non_null")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "non_null")]
    pub price: Option<f64>,
}

/// Only invoked for fields present in the payload; absent ones fall back to
/// `None` through `#[serde(default)]`.
fn non_null<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)?
        .map(Some)
        .ok_or_else(|| de::Error::custom("field may be omitted but not null"))
}

impl Book {
    pub(crate) fn new(id: BookId, data: CreateBook, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: data.title,
            author: data.author,
            price: data.price,
            created_at,
        }
    }

    /// Return a copy of this book with every field present in `patch` applied.
    /// `id` and `created_at` are carried over unchanged.
    pub fn merged(&self, patch: UpdateBook) -> Self {
        Self {
            id: self.id,
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            author: patch.author.unwrap_or_else(|| self.author.clone()),
            price: patch.price.unwrap_or(self.price),
            created_at: self.created_at,
        }
    }
}
