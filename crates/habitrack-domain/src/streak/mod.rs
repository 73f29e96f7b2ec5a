mod repository;
mod state;
mod updater;

#[cfg(test)]
mod updater_test;

pub use repository::StreakRepository;
pub use state::StreakState;
pub use updater::record_completion;
