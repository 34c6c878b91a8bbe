pub mod csv_loader;

pub use csv_loader::{load_sources, load_table, parse_table, SourceData};
