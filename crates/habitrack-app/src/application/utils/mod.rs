mod habit_lookup;

pub use habit_lookup::load_owned_habit;
