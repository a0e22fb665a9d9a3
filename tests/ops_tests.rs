use comedor::db::{draft_repo, schema};
use comedor::error::ComedorError;
use comedor::model::*;
use comedor::ops::{order_ops, roster_ops};
use comedor::queries::order_queries;

// ==========================================================================
// DRAFT EDITING
// ==========================================================================

#[test]
fn record_selection_inserts_a_new_draft() {
    let mut drafts = Vec::new();
    let person_id = Id::generate();

    order_ops::record_selection(
        &mut drafts,
        OrderDraft::new(person_id, Some("sopa".into()), None, None),
    );

    assert_eq!(drafts.len(), 1);
    assert_eq!(
        order_queries::order_status(&drafts, person_id),
        OrderStatus::Ordered
    );
}

#[test]
fn record_selection_is_last_write_wins() {
    let mut drafts = Vec::new();
    let person_id = Id::generate();

    order_ops::record_selection(
        &mut drafts,
        OrderDraft::new(person_id, Some("sopa".into()), None, None),
    );
    order_ops::record_selection(
        &mut drafts,
        OrderDraft::new(person_id, None, None, Some("arroz".into())),
    );

    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].fruit_or_soup, None);
    assert_eq!(drafts[0].main_dish, Some("arroz".into()));
}

#[test]
fn record_no_meal_supersedes_a_full_selection() {
    let mut drafts = Vec::new();
    let person_id = Id::generate();

    order_ops::record_selection(
        &mut drafts,
        OrderDraft::new(
            person_id,
            Some("fruta".into()),
            Some("jugo".into()),
            Some("arroz".into()),
        ),
    );
    order_ops::record_no_meal(&mut drafts, person_id);

    assert_eq!(drafts.len(), 1);
    assert_eq!(
        order_queries::order_status(&drafts, person_id),
        OrderStatus::NoMeal
    );
}

#[test]
fn remove_draft_returns_person_to_pending() {
    let mut drafts = Vec::new();
    let person_id = Id::generate();
    order_ops::record_no_meal(&mut drafts, person_id);

    assert!(order_ops::remove_draft(&mut drafts, person_id));
    assert!(!order_ops::remove_draft(&mut drafts, person_id));
    assert_eq!(
        order_queries::order_status(&drafts, person_id),
        OrderStatus::Pending
    );
}

// ==========================================================================
// CONTINUE ACTION
// ==========================================================================

#[test]
fn save_and_continue_refuses_while_gate_is_closed() {
    let conn = schema::test_connection();
    let people = roster_ops::sample_roster();
    let drafts: Vec<OrderDraft> = people[..4]
        .iter()
        .map(|p| OrderDraft::no_meal(p.id))
        .collect();

    let proceeded = order_ops::save_and_continue(&conn, &people, &drafts).unwrap();
    assert!(!proceeded);
    // Nothing was written.
    assert!(draft_repo::load(&conn).unwrap().is_empty());
}

#[test]
fn save_and_continue_persists_when_everyone_has_a_draft() {
    let conn = schema::test_connection();
    let people = roster_ops::sample_roster();
    let drafts: Vec<OrderDraft> = people
        .iter()
        .map(|p| OrderDraft::new(p.id, None, None, Some("almuerzo".into())))
        .collect();

    let proceeded = order_ops::save_and_continue(&conn, &people, &drafts).unwrap();
    assert!(proceeded);
    assert_eq!(draft_repo::load(&conn).unwrap(), drafts);
}

// ==========================================================================
// ROSTER FALLBACK POLICY
// ==========================================================================

#[test]
fn failed_fetch_falls_back_to_the_sample_roster() {
    let people = roster_ops::resolve_roster(Err(ComedorError::Directory(
        "could not reach directory".into(),
    )));

    assert_eq!(people.len(), 5);
    assert_eq!(
        people
            .iter()
            .filter(|p| p.category == Category::Student)
            .count(),
        3
    );
    assert_eq!(
        people
            .iter()
            .filter(|p| p.category == Category::Teacher)
            .count(),
        2
    );
}

#[test]
fn empty_fetch_falls_back_to_the_sample_roster() {
    let people = roster_ops::resolve_roster(Ok(Vec::new()));
    assert_eq!(people.len(), 5);
}

#[test]
fn successful_fetch_passes_through_sorted() {
    let fetched = vec![
        Person::new("Zulema".into(), "z.jpg".into(), Category::Teacher),
        Person::new("Beto".into(), "b.jpg".into(), Category::Student),
    ];
    let people = roster_ops::resolve_roster(Ok(fetched));

    assert_eq!(people.len(), 2);
    assert_eq!(people[0].name, "Beto");
    assert_eq!(people[1].name, "Zulema");
}

#[test]
fn sample_roster_ids_are_stable_across_calls() {
    let a = roster_ops::sample_roster();
    let b = roster_ops::sample_roster();
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.id, y.id);
        assert_eq!(x.name, y.name);
    }
}

#[test]
fn sample_roster_is_already_in_display_order() {
    let people = roster_ops::sample_roster();
    let mut sorted = people.clone();
    comedor::queries::roster_queries::sort_roster(&mut sorted);
    let names: Vec<&str> = people.iter().map(|p| p.name.as_str()).collect();
    let sorted_names: Vec<&str> = sorted.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, sorted_names);
}
