pub mod coordinates;
pub mod metric;
pub mod month;
pub mod record;
