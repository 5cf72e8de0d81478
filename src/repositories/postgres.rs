use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::entities::order::{NewOrder, Order};
use crate::repositories::{ListOrdersQuery, OrderRepository, RepoError};

/// Orders persisted in a single Postgres table. Items live serialized as a
/// JSON text blob in one column; the pool handles all connection sharing.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

/// Raw row shape: items as the stored text blob, decoded on the way out.
#[derive(FromRow)]
struct OrderRow {
    id: String,
    status: String,
    items: String,
    total: f64,
    currency_unit: String,
    created_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self) -> Result<Order, RepoError> {
        Ok(Order {
            id: self.id,
            status: self.status,
            items: serde_json::from_str(&self.items)?,
            total: self.total,
            currency_unit: self.currency_unit,
            created_at: self.created_at,
        })
    }
}

const SELECT_COLUMNS: &str = "id, status, items, total, currency_unit, created_at";

impl PostgresOrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect once at startup; a failure here is fatal for the process.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .acquire_timeout(Duration::from_secs(5))
            .connect(database_url)
            .await?;
        tracing::info!("postgres connection pool established");
        Ok(Self::new(pool))
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoError> {
        let items = serde_json::to_string(&new.items)?;
        let created_at: DateTime<Utc> = sqlx::query_scalar(
            "INSERT INTO orders (id, status, items, total, currency_unit) \
             VALUES ($1, $2, $3, $4, $5) RETURNING created_at",
        )
        .bind(&new.id)
        .bind(&new.status)
        .bind(&items)
        .bind(new.total)
        .bind(&new.currency_unit)
        .fetch_one(&self.pool)
        .await?;
        Ok(new.into_order(created_at))
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, RepoError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "SELECT {SELECT_COLUMNS} FROM orders WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.ok_or(RepoError::NotFound)?.into_order()
    }

    async fn list(&self, q: ListOrdersQuery) -> Result<Vec<Order>, RepoError> {
        let mut query: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("SELECT {SELECT_COLUMNS} FROM orders WHERE 1=1"));
        if let Some(id) = q.id {
            query.push(" AND id = ").push_bind(id);
        }
        if let Some(status) = q.status {
            query.push(" AND status = ").push_bind(status);
        }
        if let Some(currency_unit) = q.currency_unit {
            query.push(" AND currency_unit = ").push_bind(currency_unit);
        }
        if let Some(total) = q.total {
            query.push(" AND total = ").push_bind(total);
        }
        // sort column comes from the SortField allow-list, never raw input
        query.push(" ORDER BY ").push(q.sort.column());

        let rows: Vec<OrderRow> = query.build_query_as().fetch_all(&self.pool).await?;
        rows.into_iter().map(OrderRow::into_order).collect()
    }

    async fn set_status(&self, id: &str, status: String) -> Result<Order, RepoError> {
        let row: Option<OrderRow> = sqlx::query_as(&format!(
            "UPDATE orders SET status = $1 WHERE id = $2 RETURNING {SELECT_COLUMNS}"
        ))
        .bind(&status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.ok_or(RepoError::NotFound)?.into_order()
    }
}
