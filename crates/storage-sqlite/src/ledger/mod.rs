mod repository;

pub use repository::LedgerRepository;

pub(crate) use repository::reconcile_in_transaction;
