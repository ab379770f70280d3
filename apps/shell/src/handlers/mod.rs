//! One handler per top-level subcommand.

pub mod auth;
pub mod dashboard;
pub mod memberships;
pub mod payments;
pub mod people;
pub mod search;
pub mod training;

use crate::models::args::Commands;
use anyhow::Result;
use chrono::NaiveDate;
use gymhub::GymHub;

/// Routes a parsed command to its handler.
pub async fn dispatch(hub: &GymHub, command: Commands, today: NaiveDate) -> Result<()> {
    match command {
        Commands::Login { usuario, contrasena } => auth::login(hub, &usuario, contrasena).await,
        Commands::Clients { action } => people::handle(hub.clients(), "clients", action).await,
        Commands::Instructors { action } => {
            people::handle(hub.instructors(), "instructors", action).await
        },
        Commands::Receptionists { action } => {
            people::handle(hub.receptionists(), "receptionists", action).await
        },
        Commands::Administrators { action } => {
            people::handle(hub.administrators(), "administrators", action).await
        },
        Commands::Memberships { action } => memberships::handle(hub, action, today).await,
        Commands::Payments { action } => payments::handle_payments(hub, action).await,
        Commands::Products { action } => payments::handle_products(hub, action).await,
        Commands::Activities { action } => training::handle_activities(hub, action).await,
        Commands::Routines { action } => training::handle_routines(hub, action).await,
        Commands::Search { target } => search::handle(hub, target).await,
        Commands::Dashboard { date } => dashboard::handle(hub, date.unwrap_or(today)).await,
    }
}
