//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on collaborator traits, never on
//! concrete stores or queues.

pub mod container;
mod registration_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use registration_service::{Registrar, RegistrationService};

#[cfg(any(test, feature = "test-utils"))]
pub use registration_service::MockRegistrationService;
