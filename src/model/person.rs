use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::Id;

/// Roster category. Serialized lowercase to match the backend's
/// `category` column values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Student,
    Teacher,
}

impl Category {
    pub const ALL: &'static [Category] = &[Category::Student, Category::Teacher];

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Student => "Estudiante",
            Category::Teacher => "Profesor",
        }
    }

    /// Section heading for a roster listing.
    pub fn section_name(&self) -> &'static str {
        match self {
            Category::Student => "Estudiantes",
            Category::Teacher => "Profesores",
        }
    }
}

/// A person in the lunch roster. Read-only for the duration of a session:
/// records come from the remote directory (or the sample fallback) at load
/// time and are never modified here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Person {
    pub id: Id<Person>,
    pub name: String,
    pub photo: String,
    pub category: Category,
    pub created_at: DateTime<Utc>,
}

impl Person {
    pub fn new(name: String, photo: String, category: Category) -> Self {
        Self {
            id: Id::generate(),
            name,
            photo,
            category,
            created_at: Utc::now(),
        }
    }
}
