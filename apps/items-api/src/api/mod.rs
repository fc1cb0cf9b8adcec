//! API routes module

use axum::Router;
use axum_helpers::server::{create_router, health_router};
use core_config::AppInfo;
use domain_items::{handlers, ApiDoc, InMemoryItemRepository, ItemService};

/// Build the full application: item routes, `/health`, the OpenAPI document,
/// request tracing and the 404 fallback.
///
/// The store is created here and owned by the router for the life of the
/// process.
pub fn app(app_info: AppInfo) -> Router {
    let repository = InMemoryItemRepository::new();
    let service = ItemService::new(repository);

    let routes = handlers::router(service).merge(health_router(app_info));
    create_router::<ApiDoc>(routes)
}
