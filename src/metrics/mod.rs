pub mod game_metrics;
pub mod persistence;

pub use game_metrics::GameMetrics;
pub use persistence::{load_stats, save_stats, StatsRecord};
