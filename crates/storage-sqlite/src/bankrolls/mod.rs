mod model;
mod repository;

pub use model::BankrollDB;
pub use repository::BankrollRepository;

pub(crate) use repository::load_owned_bankroll;
