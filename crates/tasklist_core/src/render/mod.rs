pub mod table;

pub use table::{COLUMNS, Column, EMPTY_LIST_MESSAGE, TableRenderer};
