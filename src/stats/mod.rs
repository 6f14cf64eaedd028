pub mod aggregate;
pub mod collect;
pub mod exec;
pub mod output;

pub use aggregate::Aggregator;
pub use collect::{collect_buckets, Collected};
pub use exec::exec;
pub use output::{output_calendar, output_json};
