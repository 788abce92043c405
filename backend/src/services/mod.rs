//! Business logic services for the Farmcare recommendation service

pub mod prompt;
pub mod recommendation;
pub mod report;
pub mod schedule;
pub mod validation;

pub use recommendation::RecommendationService;
