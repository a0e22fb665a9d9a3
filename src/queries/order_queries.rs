use crate::model::{Id, OrderDraft, OrderStatus, Person};

/// The draft for a person, if one exists.
pub fn find_draft(drafts: &[OrderDraft], person_id: Id<Person>) -> Option<&OrderDraft> {
    drafts.iter().find(|d| d.person_id == person_id)
}

/// Display state for one person. Absence of a draft is itself a valid
/// state (`Pending`), not an error.
pub fn order_status(drafts: &[OrderDraft], person_id: Id<Person>) -> OrderStatus {
    match find_draft(drafts, person_id) {
        None => OrderStatus::Pending,
        Some(draft) if draft.is_no_meal() => OrderStatus::NoMeal,
        Some(_) => OrderStatus::Ordered,
    }
}

/// The completion gate: true only when the roster is non-empty and every
/// person has a draft. A no-meal placeholder counts as a draft.
pub fn all_orders_complete(people: &[Person], drafts: &[OrderDraft]) -> bool {
    !people.is_empty()
        && people
            .iter()
            .all(|person| drafts.iter().any(|d| d.person_id == person.id))
}

/// Progress line shown above the roster, e.g. "4 de 5". Counts drafts,
/// not matched people, exactly as the web client does.
pub fn progress_label(people: &[Person], drafts: &[OrderDraft]) -> String {
    format!("{} de {}", drafts.len(), people.len())
}
