mod model;
mod repository;

pub use model::WagerDB;
pub use repository::WagerRepository;
