//! Export runs: reading the selected books in parallel, assembling the
//! requested tables, and writing them out as CSV.
//!
//! ```no_run
//! use hanzi_report::{assemble, list_books};
//! use std::path::Path;
//!
//! let books = list_books("books").unwrap();
//! let mut report = assemble(&books, &hanzi_config::ExportConfig::default()).unwrap();
//! report.write(Path::new("export"));
//! print!("{}", report.log());
//! ```

mod assemble;
pub mod error;
mod log;
mod pipeline;
mod source;
mod table;
mod write;

pub use crate::assemble::{Report, assemble};
pub use crate::log::{Event, RunLog};
pub use crate::pipeline::{BookOutcome, analyze_books};
pub use crate::source::{BOOK_EXTENSION, BookFile, BookSource, TextBook, list_books};
pub use crate::table::{COMBINED_STATS_FILE, SHARED_HANZI_FILE, Table};
pub use crate::write::write_table;
