use serde::{Deserialize, Serialize};

use super::ids::Id;
use super::person::Person;

/// A locally cached meal selection for one person, not yet submitted
/// anywhere. All three choice fields are independently optional: `None`
/// means the component was explicitly skipped, and a draft with all three
/// `None` is a valid "no lunch" selection, distinct from no draft existing.
///
/// `None` serializes as an explicit `null` so a stored draft list stays
/// byte-compatible with what the web client keeps under the same key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderDraft {
    pub person_id: Id<Person>,
    pub fruit_or_soup: Option<String>,
    pub juice_or_lemonade: Option<String>,
    pub main_dish: Option<String>,
}

impl OrderDraft {
    pub fn new(
        person_id: Id<Person>,
        fruit_or_soup: Option<String>,
        juice_or_lemonade: Option<String>,
        main_dish: Option<String>,
    ) -> Self {
        Self {
            person_id,
            fruit_or_soup,
            juice_or_lemonade,
            main_dish,
        }
    }

    /// An explicit "no lunch" placeholder for a person.
    pub fn no_meal(person_id: Id<Person>) -> Self {
        Self::new(person_id, None, None, None)
    }

    pub fn is_no_meal(&self) -> bool {
        self.fruit_or_soup.is_none()
            && self.juice_or_lemonade.is_none()
            && self.main_dish.is_none()
    }
}

/// Display state of one person's order within the drafting flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderStatus {
    /// No draft exists for this person yet.
    Pending,
    /// A draft exists with every choice field null.
    NoMeal,
    /// A draft exists with at least one choice made.
    Ordered,
}

impl OrderStatus {
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pendiente",
            OrderStatus::NoMeal => "Sin almuerzo",
            OrderStatus::Ordered => "Pedido realizado",
        }
    }

    /// One-character marker used next to names in roster listings.
    pub fn marker(&self) -> &'static str {
        match self {
            OrderStatus::Pending => " ",
            OrderStatus::NoMeal => "x",
            OrderStatus::Ordered => "+",
        }
    }
}
