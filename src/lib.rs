pub mod error;
pub mod validation;
pub mod model;
pub mod db;
pub mod directory;
pub mod ops;
pub mod queries;
pub mod cli;
