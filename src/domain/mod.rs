// Domain layer: framework-agnostic, 100% testable
pub mod models;
