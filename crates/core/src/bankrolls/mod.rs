//! Bankrolls module - domain models, services, and traits.

mod bankrolls_model;
mod bankrolls_service;
mod bankrolls_traits;

#[cfg(test)]
mod bankrolls_model_tests;


// Re-export the public interface
pub use bankrolls_model::{Bankroll, BankrollUpdate, NewBankroll};
pub use bankrolls_service::BankrollService;
pub use bankrolls_traits::{BankrollRepositoryTrait, BankrollServiceTrait};
