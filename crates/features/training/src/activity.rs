use crate::error::{TrainingError, TrainingErrorExt};
use gymhub_domain::Activity;
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::validation::Validate;

type Records = Collection<Activity>;

/// Scheduled group classes (`actividades`).
#[derive(Debug, Clone)]
pub struct ActivityService {
    records: Records,
}

impl ActivityService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { records: Collection::new(api) }
    }

    pub async fn list(&self) -> Result<Vec<Activity>, TrainingError> {
        self.records.list().await.context("Failed to list activities")
    }

    pub async fn get(&self, id: &str) -> Result<Activity, TrainingError> {
        self.records.get(id).await.context(format!("Failed to load activity {id}"))
    }

    /// Classes taught by one instructor (`actividades/instructor/{folio}`).
    pub async fn by_instructor(&self, instructor_folio: &str) -> Result<Vec<Activity>, TrainingError> {
        self.records
            .api()
            .get(&Records::path(&["instructor", instructor_folio]))
            .await
            .context(format!("Failed to load activities of {instructor_folio}"))
    }

    pub async fn create(&self, activity: &Activity) -> Result<Activity, TrainingError> {
        activity.validate()?;
        self.records.create(activity).await.context("Failed to create activity")
    }

    pub async fn update(&self, id: &str, activity: &Activity) -> Result<Activity, TrainingError> {
        activity.validate()?;
        self.records.update(id, activity).await.context(format!("Failed to update activity {id}"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), TrainingError> {
        self.records.delete(id).await.context(format!("Failed to delete activity {id}"))
    }
}

/// Enrolled share of capacity, in percent.
#[must_use]
pub fn occupancy(activity: &Activity) -> f64 {
    if activity.cupo_maximo == 0 {
        return 0.0;
    }
    (f64::from(activity.inscritos) * 100.0 / f64::from(activity.cupo_maximo)).min(100.0)
}

#[must_use]
pub const fn available_spots(activity: &Activity) -> u32 {
    activity.cupo_maximo.saturating_sub(activity.inscritos)
}

/// `09:00–10:00`
#[must_use]
pub fn schedule_label(activity: &Activity) -> String {
    format!("{}–{}", activity.hora_inicio.format("%H:%M"), activity.hora_fin.format("%H:%M"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use gymhub_domain::CatalogStatus;

    fn class(cupo: u32, inscritos: u32) -> Activity {
        Activity {
            id: None,
            nombre: "Yoga".to_owned(),
            descripcion: None,
            folio_instructor: Some("INS001".to_owned()),
            dia_semana: Some("Lunes".to_owned()),
            hora_inicio: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            hora_fin: NaiveTime::from_hms_opt(10, 0, 0).unwrap(),
            cupo_maximo: cupo,
            inscritos,
            estatus: CatalogStatus::Active,
        }
    }

    #[test]
    fn occupancy_and_spots() {
        assert_eq!(occupancy(&class(20, 5)), 25.0);
        assert_eq!(occupancy(&class(0, 0)), 0.0);
        assert_eq!(occupancy(&class(10, 12)), 100.0);
        assert_eq!(available_spots(&class(20, 5)), 15);
        assert_eq!(available_spots(&class(10, 12)), 0);
        assert_eq!(schedule_label(&class(1, 0)), "09:00–10:00");
    }
}
