use gymhub_domain::{Activity, CatalogStatus, Routine, RoutineLevel};
use gymhub_kernel::filter::{Filter, any_text_matches, text_matches};

/// Screen filter for the class schedule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityFilter {
    /// Matched against name and description.
    pub text: String,
    pub instructor: Option<String>,
    pub status: Option<CatalogStatus>,
    /// Day of week as stored (`Lunes`), matched without regard to case.
    pub day: Option<String>,
}

impl Filter<Activity> for ActivityFilter {
    fn matches(&self, item: &Activity) -> bool {
        if self.status.is_some_and(|s| s != item.estatus) {
            return false;
        }
        if let Some(folio) = self.instructor.as_deref()
            && !item.folio_instructor.as_deref().is_some_and(|f| f.eq_ignore_ascii_case(folio.trim()))
        {
            return false;
        }
        if let Some(day) = self.day.as_deref()
            && !item.dia_semana.as_deref().is_some_and(|d| text_matches(day, d))
        {
            return false;
        }
        any_text_matches(&self.text, [item.nombre.as_str(), item.descripcion.as_deref().unwrap_or_default()])
    }
}

/// Screen filter for routines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineFilter {
    /// Matched against name, goal and exercise names.
    pub text: String,
    pub level: Option<RoutineLevel>,
    pub instructor: Option<String>,
}

impl Filter<Routine> for RoutineFilter {
    fn matches(&self, item: &Routine) -> bool {
        if self.level.is_some_and(|l| l != item.nivel) {
            return false;
        }
        if let Some(folio) = self.instructor.as_deref()
            && !item.folio_instructor.as_deref().is_some_and(|f| f.eq_ignore_ascii_case(folio.trim()))
        {
            return false;
        }
        any_text_matches(
            &self.text,
            [item.nombre.as_str(), item.objetivo.as_deref().unwrap_or_default()]
                .into_iter()
                .chain(item.ejercicios.iter().map(|e| e.nombre.as_str())),
        )
    }
}
