//! Queries module - read-side aggregates and paginated wager history.

mod queries_model;
mod queries_service;
mod queries_traits;



pub use queries_model::{DailyStats, HistoryPage, HistoryQuery, OutcomeFilter};
pub use queries_service::QueryService;
pub use queries_traits::{QueryRepositoryTrait, QueryServiceTrait};
