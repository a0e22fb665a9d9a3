use rusqlite::Connection;

use crate::db::draft_repo;
use crate::error::ComedorResult;
use crate::model::{Id, OrderDraft, Person};
use crate::queries::order_queries;

/// Insert or replace the draft for `draft.person_id`. Last write wins,
/// which is what keeps the one-draft-per-person invariant.
pub fn record_selection(drafts: &mut Vec<OrderDraft>, draft: OrderDraft) {
    match drafts.iter_mut().find(|d| d.person_id == draft.person_id) {
        Some(existing) => *existing = draft,
        None => drafts.push(draft),
    }
}

/// Record an explicit "no lunch" selection for a person.
pub fn record_no_meal(drafts: &mut Vec<OrderDraft>, person_id: Id<Person>) {
    record_selection(drafts, OrderDraft::no_meal(person_id));
}

/// Drop a person's draft, returning them to the pending state.
/// Returns true if a draft was removed.
pub fn remove_draft(drafts: &mut Vec<OrderDraft>, person_id: Id<Person>) -> bool {
    let before = drafts.len();
    drafts.retain(|d| d.person_id != person_id);
    drafts.len() != before
}

/// The "continue" action: persist the draft list and allow navigation to
/// the summary, but only when every person has a draft. Returns whether
/// the gate was open; when it is closed nothing is written.
pub fn save_and_continue(
    conn: &Connection,
    people: &[Person],
    drafts: &[OrderDraft],
) -> ComedorResult<bool> {
    if !order_queries::all_orders_complete(people, drafts) {
        return Ok(false);
    }
    draft_repo::save(conn, drafts)?;
    Ok(true)
}
