//! Output generation for migrated tables.
//!
//! Each derived table is written as `<name>.csv` with a header row and no
//! index column. Cell rendering follows [`OutputOptions`].
//!
//! [`OutputOptions`]: framer_model::OutputOptions

mod csv_writer;

pub use csv_writer::{ensure_output_dir, render_cell, write_csv, write_csv_outputs};
