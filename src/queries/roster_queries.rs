use crate::model::{Category, Person};

pub fn students(people: &[Person]) -> Vec<&Person> {
    by_category(people, Category::Student)
}

pub fn teachers(people: &[Person]) -> Vec<&Person> {
    by_category(people, Category::Teacher)
}

pub fn by_category(people: &[Person], category: Category) -> Vec<&Person> {
    people.iter().filter(|p| p.category == category).collect()
}

/// Category then name ascending, the same order the directory query asks
/// the backend for.
pub fn sort_roster(people: &mut [Person]) {
    people.sort_by(|a, b| {
        a.category
            .cmp(&b.category)
            .then_with(|| a.name.cmp(&b.name))
    });
}
