pub mod csv_rows;

pub use csv_rows::{read_rows, read_rows_from_path};
