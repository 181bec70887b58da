mod cell_value;
mod row;
mod row_error;
mod table;

pub use cell_value::CellValue;
pub use row::Row;
pub use row_error::RowError;
pub use table::Table;
