mod aggregate;
mod repository;

#[cfg(test)]
mod aggregate_test;

pub use aggregate::{Frequency, Habit};
pub use repository::HabitRepository;
