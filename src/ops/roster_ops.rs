use chrono::Utc;
use uuid::Uuid;

use crate::directory::{self, DirectoryConfig};
use crate::error::ComedorResult;
use crate::model::{Category, Id, Person};
use crate::queries::roster_queries;

/// Load the roster: remote directory when configured and reachable,
/// sample data otherwise.
pub fn load_roster(config: Option<&DirectoryConfig>) -> Vec<Person> {
    match config {
        Some(cfg) => resolve_roster(directory::fetch_people(cfg)),
        None => {
            log::warn!("no directory backend configured, using sample roster");
            sample_roster()
        }
    }
}

/// Degraded-mode policy for the directory query. An error or an empty
/// result both yield the fixed sample roster so the flow stays usable
/// without a configured backend. Logged, never surfaced as an error.
pub fn resolve_roster(fetched: ComedorResult<Vec<Person>>) -> Vec<Person> {
    match fetched {
        Ok(people) if !people.is_empty() => {
            let mut people = people;
            // The query already orders by category then name; re-sorting
            // keeps the invariant even if the backend misbehaves.
            roster_queries::sort_roster(&mut people);
            people
        }
        Ok(_) => {
            log::warn!("directory returned no people, using sample roster");
            sample_roster()
        }
        Err(e) => {
            log::warn!("directory query failed ({}), using sample roster", e);
            sample_roster()
        }
    }
}

/// The fixed five-person sample roster: three students, two teachers,
/// already in category-then-name order. Ids are stable across runs so
/// stored drafts keep matching between sessions.
pub fn sample_roster() -> Vec<Person> {
    let entries: [(u128, &str, &str, Category); 5] = [
        (
            1,
            "Ana María González",
            "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=300",
            Category::Student,
        ),
        (
            2,
            "Carlos Rodríguez",
            "https://images.pexels.com/photos/2379004/pexels-photo-2379004.jpeg?auto=compress&cs=tinysrgb&w=300",
            Category::Student,
        ),
        (
            3,
            "María José Silva",
            "https://images.pexels.com/photos/1181686/pexels-photo-1181686.jpeg?auto=compress&cs=tinysrgb&w=300",
            Category::Student,
        ),
        (
            4,
            "Prof. Carmen Vargas",
            "https://images.pexels.com/photos/1181424/pexels-photo-1181424.jpeg?auto=compress&cs=tinysrgb&w=300",
            Category::Teacher,
        ),
        (
            5,
            "Prof. Roberto Jiménez",
            "https://images.pexels.com/photos/2182970/pexels-photo-2182970.jpeg?auto=compress&cs=tinysrgb&w=300",
            Category::Teacher,
        ),
    ];

    entries
        .into_iter()
        .map(|(n, name, photo, category)| Person {
            id: Id::new(Uuid::from_u128(n)),
            name: name.to_string(),
            photo: photo.to_string(),
            category,
            created_at: Utc::now(),
        })
        .collect()
}
