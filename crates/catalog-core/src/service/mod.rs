//! # Services
//!
//! Orchestration over the store contracts.
//!
//! - [`ProductOrchestrator`] - product CRUD plus every option operation,
//!   guarded by existence checks
//! - [`OptionOrchestrator`] - pass-through to the option store

pub mod option;
pub mod product;

pub use option::OptionOrchestrator;
pub use product::ProductOrchestrator;
