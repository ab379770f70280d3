use crate::error::{PeopleError, PeopleErrorExt};
use gymhub_domain::{
    Administrator, Client, Instructor, Person, PersonStatus, Receptionist, Resource,
};
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::folio::next_folio;
use gymhub_kernel::validation::Validate;
use std::fmt;
use tracing::{debug, info};

/// CRUD, search and folio assignment for one kind of person record.
pub struct PersonService<P> {
    records: Collection<P>,
}

pub type ClientService = PersonService<Client>;
pub type InstructorService = PersonService<Instructor>;
pub type ReceptionistService = PersonService<Receptionist>;
pub type AdministratorService = PersonService<Administrator>;

impl<P> Clone for PersonService<P> {
    fn clone(&self) -> Self {
        Self { records: self.records.clone() }
    }
}

impl<P: Resource> fmt::Debug for PersonService<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonService").field("records", &self.records).finish()
    }
}

impl<P> PersonService<P>
where
    P: Person + Resource + Validate,
{
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { records: Collection::new(api) }
    }

    pub async fn list(&self) -> Result<Vec<P>, PeopleError> {
        self.records.list().await.context(format!("Failed to list {}s", P::NAME))
    }

    pub async fn get(&self, folio: &str) -> Result<P, PeopleError> {
        self.records.get(folio).await.context(format!("Failed to load {} {folio}", P::NAME))
    }

    /// Backend search over name, folio and contact fields; blank terms list everything.
    pub async fn search(&self, term: &str) -> Result<Vec<P>, PeopleError> {
        debug!(resource = P::NAME, term, "Searching");
        self.records.search(term).await.context(format!("Failed to search {}s", P::NAME))
    }

    /// Creates `person` with the folio it already carries.
    pub async fn create(&self, person: &P) -> Result<P, PeopleError> {
        person.validate()?;
        self.records.create(person).await.context(format!("Failed to create {}", P::NAME))
    }

    /// Assigns the next free folio for this record kind, then creates the record.
    pub async fn create_with_next_folio(&self, mut person: P) -> Result<P, PeopleError> {
        person.validate()?;
        let folio = self.next_folio().await?;
        info!(resource = P::NAME, folio = %folio, "Assigning folio");
        person.set_folio(folio);
        self.records.create(&person).await.context(format!("Failed to create {}", P::NAME))
    }

    pub async fn update(&self, folio: &str, person: &P) -> Result<P, PeopleError> {
        person.validate()?;
        self.records.update(folio, person).await.context(format!("Failed to update {} {folio}", P::NAME))
    }

    pub async fn delete(&self, folio: &str) -> Result<(), PeopleError> {
        self.records.delete(folio).await.context(format!("Failed to delete {} {folio}", P::NAME))
    }

    /// Activates or deactivates a record, keeping every other field as stored.
    pub async fn set_status(&self, folio: &str, status: PersonStatus) -> Result<P, PeopleError> {
        let mut person = self.get(folio).await?;
        if person.status() == status {
            debug!(resource = P::NAME, folio, %status, "Status unchanged");
            return Ok(person);
        }
        person.set_status(status);
        let updated = self
            .records
            .update(folio, &person)
            .await
            .context(format!("Failed to change status of {} {folio}", P::NAME))?;
        info!(resource = P::NAME, folio, %status, "Status changed");
        Ok(updated)
    }

    /// Folio the next created record will get (`CLI001` when the collection is empty).
    pub async fn next_folio(&self) -> Result<String, PeopleError> {
        let folios = self.records.keys().await.context(format!("Failed to read {} folios", P::NAME))?;
        Ok(next_folio(P::FOLIO_PREFIX, &folios))
    }
}
