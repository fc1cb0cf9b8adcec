//! Items Domain
//!
//! In-memory CRUD for a single resource type, the item.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← /items, /items/{id}
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← NotFound translation, tracing spans
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Item store: map + id counter behind one mutex
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Item, ItemPayload
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, InMemoryItemRepository, ItemService};
//!
//! let repository = InMemoryItemRepository::new();
//! let service = ItemService::new(repository);
//!
//! // Serves /items and /items/{id}
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{Item, ItemId, ItemPayload};
pub use repository::{InMemoryItemRepository, ItemRepository};
pub use service::ItemService;
