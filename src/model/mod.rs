pub mod ids;
pub mod person;
pub mod order;

// Re-exports for convenience
pub use ids::Id;
pub use person::{Category, Person};
pub use order::{OrderDraft, OrderStatus};
