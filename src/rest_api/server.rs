//! # REST API HTTP Server
//!
//! Axum routes for the listing service.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::model::{CreatePropertyRequest, PropertyView, SearchPage, SpaceStats, SpaceView};
use crate::service::ListingService;
use crate::store::ListingStore;

use super::errors::{RestError, RestResult};
use super::parser::{parse_property_query, parse_space_query};
use super::response::CreatedResponse;

/// REST API server state
pub struct RestServer<S: ListingStore> {
    service: Arc<ListingService<S>>,
}

impl<S: ListingStore + 'static> RestServer<S> {
    pub fn new(service: Arc<ListingService<S>>) -> Self {
        Self { service }
    }

    /// Build the Axum router
    pub fn router(self) -> Router {
        Router::new()
            .route(
                "/properties",
                get(list_properties_handler::<S>).post(create_property_handler::<S>),
            )
            .route(
                "/properties/:id",
                get(get_property_handler::<S>).put(replace_property_handler::<S>),
            )
            .route("/spaces", get(list_spaces_handler::<S>))
            .route("/stats/spaces", get(space_stats_handler::<S>))
            .with_state(self.service)
    }
}

/// Shared state type
type ServiceState<S> = State<Arc<ListingService<S>>>;

/// A non-integer id names no property.
fn property_id(path: Result<Path<i64>, PathRejection>) -> RestResult<i64> {
    path.map(|Path(id)| id).map_err(|_| RestError::NotFound)
}

fn request_body(
    body: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> RestResult<CreatePropertyRequest> {
    body.map(|Json(req)| req)
        .map_err(|e| RestError::InvalidBody(e.body_text()))
}

/// `GET /properties`
async fn list_properties_handler<S: ListingStore + 'static>(
    State(service): ServiceState<S>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<Json<SearchPage<PropertyView>>> {
    let query = parse_property_query(&params)?;
    let page = service.search_properties(&query)?;
    Ok(Json(page))
}

/// `GET /properties/{id}`
async fn get_property_handler<S: ListingStore + 'static>(
    State(service): ServiceState<S>,
    path: Result<Path<i64>, PathRejection>,
) -> RestResult<Json<PropertyView>> {
    let id = property_id(path)?;
    let property = service.get_property(id)?;
    Ok(Json(property))
}

/// `POST /properties`
async fn create_property_handler<S: ListingStore + 'static>(
    State(service): ServiceState<S>,
    body: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> RestResult<impl IntoResponse> {
    let request = request_body(body)?;
    let created = CreatedResponse::new(service.create_property(&request)?);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, created.location())],
        Json(created),
    ))
}

/// `PUT /properties/{id}`
async fn replace_property_handler<S: ListingStore + 'static>(
    State(service): ServiceState<S>,
    path: Result<Path<i64>, PathRejection>,
    body: Result<Json<CreatePropertyRequest>, JsonRejection>,
) -> RestResult<StatusCode> {
    let id = property_id(path)?;
    let request = request_body(body)?;
    service.replace_property(id, &request)?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /spaces`
async fn list_spaces_handler<S: ListingStore + 'static>(
    State(service): ServiceState<S>,
    Query(params): Query<HashMap<String, String>>,
) -> RestResult<Json<SearchPage<SpaceView>>> {
    let query = parse_space_query(&params)?;
    let page = service.search_spaces(&query)?;
    Ok(Json(page))
}

/// `GET /stats/spaces`
async fn space_stats_handler<S: ListingStore + 'static>(
    State(service): ServiceState<S>,
) -> RestResult<Json<SpaceStats>> {
    let stats = service.space_stats()?;
    Ok(Json(stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::SqliteStore;

    #[test]
    fn test_router_builds() {
        let service = Arc::new(ListingService::new(SqliteStore::open_in_memory().unwrap()));
        let _router = RestServer::new(service).router();
    }
}
