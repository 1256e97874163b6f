//! Server-side API backend and business logic.
//!
//! The backend is layered the same way for every resource:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules, transactions, and notification fan-out
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! Supporting modules provide configuration (`config`), shared state (`state`),
//! startup wiring (`startup`) and the route table with API documentation (`router`).
//!
//! # Request Flow
//!
//! 1. **Router** matches the request to a controller
//! 2. **Controller** authenticates through `AuthGuard`, converts DTOs to params, calls a service
//! 3. **Service** validates input, opens a transaction where writes must be atomic, calls repositories
//! 4. **Data** runs queries and returns domain models
//! 5. **Controller** converts the domain model to a DTO and responds

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
