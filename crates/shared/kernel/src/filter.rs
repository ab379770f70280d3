//! Client-side filtering of loaded collections.

/// A predicate over loaded records.
///
/// Filters are pure: applying the same filter to its own output keeps every item.
pub trait Filter<T> {
    fn matches(&self, item: &T) -> bool;
}

impl<T, F> Filter<T> for F
where
    F: Fn(&T) -> bool,
{
    fn matches(&self, item: &T) -> bool {
        self(item)
    }
}

/// Returns the items accepted by `filter`, in their original order.
pub fn apply_filter<T, F>(items: &[T], filter: &F) -> Vec<T>
where
    T: Clone,
    F: Filter<T> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).cloned().collect()
}

/// Case-insensitive containment check used by every text filter.
///
/// The query is trimmed; a blank query matches everything.
#[must_use]
pub fn text_matches(query: &str, haystack: &str) -> bool {
    let query = query.trim();
    query.is_empty() || haystack.to_lowercase().contains(&query.to_lowercase())
}

/// True when `query` matches any of `fields`.
pub fn any_text_matches<'a>(query: &str, fields: impl IntoIterator<Item = &'a str>) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }
    let query = query.to_lowercase();
    fields.into_iter().any(|field| field.to_lowercase().contains(&query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn text_matching_ignores_case_and_padding() {
        assert!(text_matches("  GARC ", "María García"));
        assert!(text_matches("", "anything"));
        assert!(text_matches("   ", ""));
        assert!(!text_matches("lopez", "María García"));
    }

    #[test]
    fn any_field_may_match() {
        assert!(any_text_matches("cli00", ["Ana", "CLI007"]));
        assert!(!any_text_matches("zz", ["Ana", "CLI007"]));
        assert!(any_text_matches(" ", std::iter::empty()));
    }

    #[test]
    fn closures_filter_in_order() {
        let odd = |n: &i32| n % 2 != 0;
        assert_eq!(apply_filter(&[5, 2, 3, 8, 1], &odd), vec![5, 3, 1]);
    }

    proptest! {
        #[test]
        fn filtering_is_idempotent(items in prop::collection::vec(any::<i16>(), 0..64), threshold in any::<i16>()) {
            let above = move |n: &i16| *n > threshold;
            let once = apply_filter(&items, &above);
            let twice = apply_filter(&once, &above);
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn text_filter_is_idempotent(words in prop::collection::vec("[a-zA-Z ]{0,12}", 0..32), query in "[a-zA-Z ]{0,4}") {
            let by_text = |w: &String| text_matches(&query, w);
            let once = apply_filter(&words, &by_text);
            prop_assert_eq!(apply_filter(&once, &by_text), once.clone());
            prop_assert!(once.len() <= words.len());
        }
    }
}
