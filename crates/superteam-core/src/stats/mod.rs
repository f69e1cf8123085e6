// Season statistics: fixed keys and the aggregated table.

pub mod keys;
pub mod table;
