use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::entities::order::{NewOrder, Order};
use crate::repositories::{ListOrdersQuery, OrderRepository, RepoError, SortField};

/// Map-backed store with the same observable behavior as the Postgres
/// repository. Used by the HTTP tests; also handy for local hacking.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    inner: Arc<RwLock<HashMap<String, Order>>>,
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn create(&self, new: NewOrder) -> Result<Order, RepoError> {
        let mut map = self.inner.write().await;
        let order = new.into_order(Utc::now());
        map.insert(order.id.clone(), order.clone());
        Ok(order)
    }

    async fn get_by_id(&self, id: &str) -> Result<Order, RepoError> {
        let map = self.inner.read().await;
        map.get(id).cloned().ok_or(RepoError::NotFound)
    }

    async fn list(&self, q: ListOrdersQuery) -> Result<Vec<Order>, RepoError> {
        let map = self.inner.read().await;
        let mut items: Vec<Order> = map.values().cloned().collect();

        if let Some(id) = q.id {
            items.retain(|o| o.id == id);
        }
        if let Some(status) = q.status {
            items.retain(|o| o.status == status);
        }
        if let Some(currency_unit) = q.currency_unit {
            items.retain(|o| o.currency_unit == currency_unit);
        }
        if let Some(total) = q.total {
            items.retain(|o| o.total == total);
        }

        match q.sort {
            SortField::Id => items.sort_by(|a, b| a.id.cmp(&b.id)),
            SortField::Status => items.sort_by(|a, b| a.status.cmp(&b.status)),
            SortField::CurrencyUnit => {
                items.sort_by(|a, b| a.currency_unit.cmp(&b.currency_unit))
            }
            SortField::Total => {
                items.sort_by(|a, b| a.total.partial_cmp(&b.total).unwrap_or(std::cmp::Ordering::Equal))
            }
            SortField::CreatedAt => items.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        }

        Ok(items)
    }

    async fn set_status(&self, id: &str, status: String) -> Result<Order, RepoError> {
        let mut map = self.inner.write().await;
        let o = map.get_mut(id).ok_or(RepoError::NotFound)?;
        o.status = status;
        Ok(o.clone())
    }
}
