use crate::models::args::{PersonAction, PersonArgs};
use crate::services::render;
use anyhow::{Result, bail};
use gymhub::domain::{Administrator, Client, Instructor, Person, PersonStatus, Receptionist, Resource};
use gymhub::features::people::{PersonFilter, PersonService};
use gymhub::kernel::filter::apply_filter;
use gymhub::kernel::validation::Validate;

/// Record kinds that can be built from the `create` flags.
pub trait NewPerson: Person + Resource + Validate + Sized {
    fn from_args(args: PersonArgs) -> Result<Self>;
}

fn blank_to_none(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

impl NewPerson for Client {
    fn from_args(args: PersonArgs) -> Result<Self> {
        Ok(Self {
            folio: String::new(),
            nombre: args.nombre,
            apellido_paterno: args.apellido_paterno,
            apellido_materno: blank_to_none(args.apellido_materno),
            email: blank_to_none(args.email),
            telefono: blank_to_none(args.telefono),
            fecha_nacimiento: args.fecha_nacimiento,
            estatus: PersonStatus::Active,
            fecha_registro: None,
        })
    }
}

impl NewPerson for Instructor {
    fn from_args(args: PersonArgs) -> Result<Self> {
        Ok(Self {
            folio: String::new(),
            nombre: args.nombre,
            apellido_paterno: args.apellido_paterno,
            apellido_materno: blank_to_none(args.apellido_materno),
            email: blank_to_none(args.email),
            telefono: blank_to_none(args.telefono),
            especialidad: blank_to_none(args.especialidad),
            estatus: PersonStatus::Active,
            fecha_registro: None,
        })
    }
}

impl NewPerson for Receptionist {
    fn from_args(args: PersonArgs) -> Result<Self> {
        Ok(Self {
            folio: String::new(),
            nombre: args.nombre,
            apellido_paterno: args.apellido_paterno,
            apellido_materno: blank_to_none(args.apellido_materno),
            email: blank_to_none(args.email),
            telefono: blank_to_none(args.telefono),
            turno: blank_to_none(args.turno),
            estatus: PersonStatus::Active,
            fecha_registro: None,
        })
    }
}

impl NewPerson for Administrator {
    fn from_args(args: PersonArgs) -> Result<Self> {
        let Some(usuario) = blank_to_none(args.usuario) else {
            bail!("Administrators need a --usuario");
        };
        Ok(Self {
            folio: String::new(),
            nombre: args.nombre,
            apellido_paterno: args.apellido_paterno,
            apellido_materno: blank_to_none(args.apellido_materno),
            email: blank_to_none(args.email),
            telefono: blank_to_none(args.telefono),
            usuario,
            contrasena: args.contrasena,
            estatus: PersonStatus::Active,
            fecha_registro: None,
        })
    }
}

/// Runs a people subcommand against `service`; `title` names the records in output.
pub async fn handle<P: NewPerson>(
    service: &PersonService<P>,
    title: &str,
    action: PersonAction,
) -> Result<()> {
    match action {
        PersonAction::List { text, status } => {
            let mut filter = PersonFilter::text(text.unwrap_or_default());
            if let Some(status) = status {
                filter = filter.with_status(status);
            }
            let records = service.list().await?;
            render::people(title, &apply_filter(&records, &filter));
        },
        PersonAction::Search { term } => render::people(title, &service.search(&term).await?),
        PersonAction::Get { folio } => render::person(&service.get(&folio).await?),
        PersonAction::Create(args) => {
            let created = service.create_with_next_folio(P::from_args(args)?).await?;
            println!("✅ Created {} {}", P::NAME, created.folio());
        },
        PersonAction::SetStatus { folio, status } => {
            let updated = service.set_status(&folio, status).await?;
            println!("✅ {} {} is now {}", P::NAME, updated.folio(), updated.status());
        },
        PersonAction::Delete { folio } => {
            service.delete(&folio).await?;
            println!("✅ Deleted {} {folio}", P::NAME);
        },
        PersonAction::NextFolio => println!("{}", service.next_folio().await?),
    }
    Ok(())
}
