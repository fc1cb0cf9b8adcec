use axum::{
    Json, Router,
    extract::{FromRequestParts, Path, State},
    http::{StatusCode, request::Parts},
    response::IntoResponse,
    routing::{MethodFilter, MethodRouter, on},
};
use axum_helpers::{AppError, JsonBody, errors::handlers::method_not_allowed};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemId, ItemPayload};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(Item, ItemPayload)),
    tags(
        (name = "Items", description = "In-memory item management endpoints")
    )
)]
pub struct ApiDoc;

/// Item id taken from everything after `/items/`.
///
/// Anything that is not a base-10 `i64` (an empty or nested remainder such as
/// `1/2` included) is rejected with `400 Invalid item ID` before the handler
/// runs.
pub struct PathItemId(pub ItemId);

impl<S> FromRequestParts<S> for PathItemId
where
    S: Send + Sync,
{
    type Rejection = ItemError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let raw = match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => raw,
            Err(_) => String::new(),
        };

        raw.parse()
            .map(PathItemId)
            .map_err(|_| ItemError::InvalidId(raw))
    }
}

/// Method fallback for item routes: the id is checked before the method, so
/// `POST /items/abc` is still `400 Invalid item ID`.
async fn item_method_not_allowed(PathItemId(_): PathItemId) -> AppError {
    AppError::MethodNotAllowed
}

/// Create the items router: `/items` and everything below `/items/`.
///
/// Unsupported methods (HEAD included) get `405 Method not allowed`.
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    // axum answers HEAD from the GET handler unless a HEAD handler is set
    let item_routes: MethodRouter<Arc<ItemService<R>>> = on(MethodFilter::GET, get_item::<R>)
        .head(item_method_not_allowed)
        .put(update_item::<R>)
        .delete(delete_item::<R>)
        .fallback(item_method_not_allowed);

    Router::new()
        .route(
            "/items",
            on(MethodFilter::GET, list_items::<R>)
                .head(method_not_allowed)
                .post(create_item::<R>)
                .fallback(method_not_allowed),
        )
        // the catch-all does not match an empty remainder
        .route("/items/", item_routes.clone())
        .route("/items/{*id}", item_routes)
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items, unordered", body = Vec<Item>)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = ItemPayload,
    responses(
        (status = 201, description = "Item created with the next id", body = Item),
        (status = 400, description = "Bad request", body = String, content_type = "text/plain")
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    JsonBody(payload): JsonBody<Option<ItemPayload>>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(payload.unwrap_or_default()).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid item ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain")
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    PathItemId(id): PathItemId,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(id).await?;
    Ok(Json(item))
}

/// Replace an item
#[utoipa::path(
    put,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    request_body = ItemPayload,
    responses(
        (status = 200, description = "Item replaced; id is the path id", body = Item),
        (status = 400, description = "Invalid item ID or bad request", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain")
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    PathItemId(id): PathItemId,
    JsonBody(payload): JsonBody<Option<ItemPayload>>,
) -> ItemResult<Json<Item>> {
    let item = service.update_item(id, payload.unwrap_or_default()).await?;
    Ok(Json(item))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = i64, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, description = "Invalid item ID", body = String, content_type = "text/plain"),
        (status = 404, description = "Item not found", body = String, content_type = "text/plain")
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    PathItemId(id): PathItemId,
) -> ItemResult<impl IntoResponse> {
    service.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
