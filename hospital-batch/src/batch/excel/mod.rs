//! Excel input for the batch generator

mod cells;
mod reader;

pub use cells::{FacCell, cell_text, get_cell, is_blank, normalize_done, normalize_name, parse_fac};
pub use reader::{SheetData, read_sheet};
