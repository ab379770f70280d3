use gymhub_domain::{Person, PersonStatus};
use gymhub_kernel::filter::{Filter, any_text_matches};

/// Screen filter for people listings.
///
/// `text` is matched against folio, full name, e-mail and phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub text: String,
    pub status: Option<PersonStatus>,
}

impl PersonFilter {
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self { text: text.into(), status: None }
    }

    #[must_use]
    pub const fn with_status(mut self, status: PersonStatus) -> Self {
        self.status = Some(status);
        self
    }
}

impl<P: Person> Filter<P> for PersonFilter {
    fn matches(&self, person: &P) -> bool {
        if self.status.is_some_and(|status| status != person.status()) {
            return false;
        }
        let full_name = person.full_name();
        any_text_matches(
            &self.text,
            [person.folio(), full_name.as_str(), person.email().unwrap_or_default(), person.phone().unwrap_or_default()],
        )
    }
}
