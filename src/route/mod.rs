//! Route table - the fixed key -> section mapping navigation resolves against.

mod table;

pub use table::{Route, RouteTable, RouteTableBuilder, RouteTableError};
