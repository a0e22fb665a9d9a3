pub mod roster_ops;
pub mod order_ops;
