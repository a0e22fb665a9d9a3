pub mod schema;
pub mod draft_repo;
