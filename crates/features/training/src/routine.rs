use crate::error::{TrainingError, TrainingErrorExt};
use gymhub_domain::{Exercise, Routine};
use gymhub_http::{ApiClient, Collection};
use gymhub_kernel::validation::Validate;
use tracing::info;

type Records = Collection<Routine>;

/// Workout routines and their exercises (`rutinas`).
#[derive(Debug, Clone)]
pub struct RoutineService {
    records: Records,
}

impl RoutineService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { records: Collection::new(api) }
    }

    pub async fn list(&self) -> Result<Vec<Routine>, TrainingError> {
        self.records.list().await.context("Failed to list routines")
    }

    pub async fn get(&self, id: &str) -> Result<Routine, TrainingError> {
        self.records.get(id).await.context(format!("Failed to load routine {id}"))
    }

    pub async fn create(&self, routine: &Routine) -> Result<Routine, TrainingError> {
        routine.validate()?;
        self.records.create(routine).await.context("Failed to create routine")
    }

    pub async fn update(&self, id: &str, routine: &Routine) -> Result<Routine, TrainingError> {
        routine.validate()?;
        self.records.update(id, routine).await.context(format!("Failed to update routine {id}"))
    }

    pub async fn delete(&self, id: &str) -> Result<(), TrainingError> {
        self.records.delete(id).await.context(format!("Failed to delete routine {id}"))
    }

    /// Appends `exercise` to a routine and returns the updated routine.
    pub async fn add_exercise(&self, routine_id: &str, exercise: &Exercise) -> Result<Routine, TrainingError> {
        exercise.validate()?;
        let routine: Routine = self
            .records
            .api()
            .post(&Records::path(&[routine_id, "ejercicios"]), exercise)
            .await
            .context(format!("Failed to add exercise to routine {routine_id}"))?;
        info!(routine = %routine.nombre, exercise = %exercise.nombre, "Exercise added");
        Ok(routine)
    }

    pub async fn remove_exercise(&self, routine_id: &str, exercise_id: &str) -> Result<(), TrainingError> {
        self.records
            .api()
            .delete(&Records::path(&[routine_id, "ejercicios", exercise_id]))
            .await
            .context(format!("Failed to remove exercise {exercise_id} from routine {routine_id}"))?;
        info!(routine = routine_id, exercise = exercise_id, "Exercise removed");
        Ok(())
    }
}

/// Total sets across a routine.
#[must_use]
pub fn total_sets(routine: &Routine) -> u32 {
    routine.ejercicios.iter().map(|e| e.series).sum()
}
