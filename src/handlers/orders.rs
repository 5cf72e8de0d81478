use actix_web::http::header;
use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::entities::order::NewOrder;
use crate::errors::ApiError;
use crate::repositories::{ListOrdersQuery, SortField};
use crate::state::AppState;

/// Query parameters for the list endpoint. Unknown keys are rejected at
/// decode time, so only these columns ever become predicates.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListQuery {
    pub id: Option<String>,
    pub status: Option<String>,
    #[serde(alias = "currencyUnit")]
    pub currency_unit: Option<String>,
    pub total: Option<f64>,
    #[serde(default)]
    pub sort: SortField,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusPayload {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: String,
}

pub async fn create_order(
    state: web::Data<AppState>,
    payload: web::Json<NewOrder>,
) -> Result<HttpResponse, ApiError> {
    let created = state.orders.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/orders/{}", created.id)))
        .json(CreatedResponse { id: created.id }))
}

pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let order = state.orders.get_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(order))
}

pub async fn list_orders(
    state: web::Data<AppState>,
    q: web::Query<ListQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = q.into_inner();
    let orders = state
        .orders
        .list(ListOrdersQuery {
            id: q.id,
            status: q.status,
            currency_unit: q.currency_unit,
            total: q.total,
            sort: q.sort,
        })
        .await?;
    Ok(HttpResponse::Ok().json(orders))
}

pub async fn update_status(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateStatusPayload>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let updated = state
        .orders
        .set_status(&id, payload.into_inner().status)
        .await?;
    Ok(HttpResponse::Ok().json(updated))
}
