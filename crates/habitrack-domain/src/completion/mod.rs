mod domain_service;
mod entry;
mod repository;

pub use domain_service::{CompletedHabit, CompletionDomainService};
pub use entry::CompletionEntry;
pub use repository::CompletionRepository;
