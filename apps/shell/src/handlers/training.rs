use crate::models::args::{ActivityAction, RoutineAction};
use crate::services::render;
use anyhow::Result;
use gymhub::GymHub;
use gymhub::domain::{Activity, CatalogStatus, Exercise, Routine};
use gymhub::features::training::{ActivityFilter, RoutineFilter};
use gymhub::kernel::filter::apply_filter;

pub async fn handle_activities(hub: &GymHub, action: ActivityAction) -> Result<()> {
    let service = hub.activities();

    match action {
        ActivityAction::List { text, instructor, day, status } => {
            let filter = ActivityFilter { text: text.unwrap_or_default(), instructor, status, day };
            render::activities(&apply_filter(&service.list().await?, &filter));
        },
        ActivityAction::Instructor { folio } => {
            render::activities(&service.by_instructor(&folio).await?);
        },
        ActivityAction::Create { nombre, inicio, fin, cupo, instructor, dia, descripcion } => {
            let activity = Activity {
                id: None,
                nombre,
                descripcion,
                folio_instructor: instructor,
                dia_semana: dia,
                hora_inicio: inicio,
                hora_fin: fin,
                cupo_maximo: cupo,
                inscritos: 0,
                estatus: CatalogStatus::Active,
            };
            let created = service.create(&activity).await?;
            println!("✅ Created activity {}", created.nombre);
        },
        ActivityAction::Delete { id } => {
            service.delete(&id).await?;
            println!("✅ Deleted activity {id}");
        },
    }
    Ok(())
}

pub async fn handle_routines(hub: &GymHub, action: RoutineAction) -> Result<()> {
    let service = hub.routines();

    match action {
        RoutineAction::List { text, level, instructor } => {
            let filter = RoutineFilter { text: text.unwrap_or_default(), level, instructor };
            render::routines(&apply_filter(&service.list().await?, &filter));
        },
        RoutineAction::Get { id } => render::routine(&service.get(&id).await?),
        RoutineAction::Create { nombre, nivel, objetivo, instructor } => {
            let routine = Routine {
                id: None,
                nombre,
                descripcion: None,
                nivel,
                objetivo,
                folio_instructor: instructor,
                ejercicios: Vec::new(),
                estatus: CatalogStatus::Active,
            };
            let created = service.create(&routine).await?;
            println!("✅ Created routine {}", created.nombre);
        },
        RoutineAction::AddExercise { id, nombre, series, repeticiones, grupo, descanso } => {
            let exercise = Exercise {
                id: None,
                nombre,
                grupo_muscular: grupo,
                series,
                repeticiones,
                descanso_segundos: descanso,
                notas: None,
            };
            render::routine(&service.add_exercise(&id, &exercise).await?);
        },
        RoutineAction::RemoveExercise { id, exercise } => {
            service.remove_exercise(&id, &exercise).await?;
            println!("✅ Removed exercise {exercise} from routine {id}");
        },
        RoutineAction::Delete { id } => {
            service.delete(&id).await?;
            println!("✅ Deleted routine {id}");
        },
    }
    Ok(())
}
