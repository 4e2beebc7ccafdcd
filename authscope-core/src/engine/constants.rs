/// Number of entries kept in each "top offenders" table.
pub const TOP_N: usize = 10;
