pub mod total;

pub use total::compute_total_minutes;
