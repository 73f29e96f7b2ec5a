mod activity_log_handler;

pub use activity_log_handler::ActivityLogEventHandler;
