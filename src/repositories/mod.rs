pub mod in_memory;
pub mod postgres;

use async_trait::async_trait;
use serde::Deserialize;

use crate::entities::order::{NewOrder, Order};

/// Columns a list request may sort on. The enum is the allow-list: client
/// input never reaches the SQL text as a raw string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Id,
    Status,
    CurrencyUnit,
    Total,
    #[default]
    CreatedAt,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Status => "status",
            Self::CurrencyUnit => "currency_unit",
            Self::Total => "total",
            Self::CreatedAt => "created_at",
        }
    }
}

/// Equality filters for the list operation. Each present field becomes one
/// AND-joined predicate against the identically named column.
#[derive(Debug, Clone, Default)]
pub struct ListOrdersQuery {
    pub id: Option<String>,
    pub status: Option<String>,
    pub currency_unit: Option<String>,
    pub total: Option<f64>,
    pub sort: SortField,
}

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("not found")]
    NotFound,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("items serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoError>;
    async fn get_by_id(&self, id: &str) -> Result<Order, RepoError>;
    async fn list(&self, q: ListOrdersQuery) -> Result<Vec<Order>, RepoError>;
    async fn set_status(&self, id: &str, status: String) -> Result<Order, RepoError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_defaults_to_created_at() {
        assert_eq!(SortField::default(), SortField::CreatedAt);
    }

    #[test]
    fn sort_field_parses_snake_case() {
        let parsed: SortField = serde_json::from_str("\"currency_unit\"").unwrap();
        assert_eq!(parsed, SortField::CurrencyUnit);
        assert!(serde_json::from_str::<SortField>("\"items\"").is_err());
    }

    #[test]
    fn sort_field_columns_are_fixed_identifiers() {
        for (field, col) in [
            (SortField::Id, "id"),
            (SortField::Status, "status"),
            (SortField::CurrencyUnit, "currency_unit"),
            (SortField::Total, "total"),
            (SortField::CreatedAt, "created_at"),
        ] {
            assert_eq!(field.column(), col);
        }
    }
}
