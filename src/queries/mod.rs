pub mod order_queries;
pub mod roster_queries;
