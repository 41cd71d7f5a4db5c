use crate::domain::{Component, matcher};
use crate::ports::ComponentStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindOutcome {
    /// Nothing is stored at all.
    EmptyStore,
    /// Components containing every search word; may be empty.
    Matches(Vec<Component>),
}

/// Search stored names for components containing every word.
pub fn execute<S: ComponentStore>(store: &S, words: &[String]) -> FindOutcome {
    let components = store.load();
    if components.is_empty() {
        return FindOutcome::EmptyStore;
    }
    FindOutcome::Matches(matcher::search(&components, words).into_iter().cloned().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MemoryStore;
    use proptest::prelude::*;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn empty_store_is_reported() {
        assert_eq!(execute(&MemoryStore::new(), &words(&["led"])), FindOutcome::EmptyStore);
    }

    #[test]
    fn no_match_is_empty_list() {
        let store = MemoryStore::with(vec![Component::new("LED RED", 1)]);
        assert_eq!(execute(&store, &words(&["blue"])), FindOutcome::Matches(vec![]));
    }

    #[test]
    fn multi_word_query_is_case_insensitive() {
        let store = MemoryStore::with(vec![
            Component::new("LED RED 5MM", 1),
            Component::new("LED GREEN 5MM", 2),
        ]);
        assert_eq!(
            execute(&store, &words(&["5mm", "Red"])),
            FindOutcome::Matches(vec![Component::new("LED RED 5MM", 1)])
        );
    }

    proptest! {
        #[test]
        fn word_order_does_not_matter(
            names in proptest::collection::vec("[A-C ]{1,8}", 0..6),
            mut query in proptest::collection::vec("[a-c]{1,2}", 1..4),
        ) {
            let store = MemoryStore::with(names.iter().map(|n| Component::new(n, 1)).collect());
            let forward = execute(&store, &query);
            query.reverse();
            prop_assert_eq!(execute(&store, &query), forward);
        }

        #[test]
        fn matches_iff_every_word_is_contained(
            name in "[A-D]{1,10}",
            query in proptest::collection::vec("[a-d]{1,3}", 1..4),
        ) {
            let component = Component::new(&name, 1);
            let store = MemoryStore::with(vec![component.clone()]);
            let expected = query.iter().all(|w| component.name.contains(&w.to_uppercase()));
            let found = matches!(execute(&store, &query), FindOutcome::Matches(m) if m.len() == 1);
            prop_assert_eq!(found, expected);
        }
    }
}
