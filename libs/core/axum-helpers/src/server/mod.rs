//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with request tracing and the OpenAPI document
//! - The `/health` liveness endpoint
//! - Serving with graceful shutdown on SIGINT/SIGTERM
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router};
//! use core_config::{server::ServerConfig, app_info};
//!
//! let routes = domain_routes.merge(health_router(app_info!()));
//! let router = create_router::<ApiDoc>(routes);
//! create_app(router, &ServerConfig::default()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{OPENAPI_PATH, create_app, create_router};
pub use health::{HealthResponse, health_router};
pub use shutdown::shutdown_signal;
