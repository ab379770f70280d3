//! # CLI Argument Definitions
//!
//! Command-line surface of the `gym` shell, one subcommand per back-office screen.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use gymhub::domain::{
    CatalogStatus, MembershipStatus, PaymentMethod, PaymentStatus, PersonStatus, RoutineLevel,
};
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "gym")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Back-office shell for the GymHub backend")]
pub struct Cli {
    /// Configuration file (defaults to `gymhub.toml` in the working directory)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overrides the configuration
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Answer yes to every confirmation prompt
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check operator credentials against the backend
    Login {
        usuario: String,
        /// Password (prompted when omitted)
        #[arg(long, env = "GYMHUB_PASSWORD", hide_env_values = true)]
        contrasena: Option<String>,
    },
    /// Manage gym clients
    Clients {
        #[command(subcommand)]
        action: PersonAction,
    },
    /// Manage instructors
    Instructors {
        #[command(subcommand)]
        action: PersonAction,
    },
    /// Manage receptionists
    Receptionists {
        #[command(subcommand)]
        action: PersonAction,
    },
    /// Manage administrators
    Administrators {
        #[command(subcommand)]
        action: PersonAction,
    },
    /// Membership catalog, payment plans and client memberships
    Memberships {
        #[command(subcommand)]
        action: MembershipAction,
    },
    /// Payments ledger
    Payments {
        #[command(subcommand)]
        action: PaymentAction,
    },
    /// Product inventory
    Products {
        #[command(subcommand)]
        action: ProductAction,
    },
    /// Class schedule
    Activities {
        #[command(subcommand)]
        action: ActivityAction,
    },
    /// Training routines
    Routines {
        #[command(subcommand)]
        action: RoutineAction,
    },
    /// Search as you type: one query per line on stdin
    Search {
        #[arg(value_enum)]
        target: SearchTarget,
    },
    /// Headline figures
    Dashboard {
        /// Reference date (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

/// Collections with a backend search endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchTarget {
    Clients,
    Instructors,
    Receptionists,
    Administrators,
    Products,
}

#[derive(Debug, Subcommand)]
pub enum PersonAction {
    /// List records, filtered locally
    List {
        /// Matches folio, name, e-mail or phone
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, value_parser = parse_choice::<PersonStatus>)]
        status: Option<PersonStatus>,
    },
    /// Backend search
    Search { term: String },
    Get { folio: String },
    /// Register a new record with the next free folio
    Create(PersonArgs),
    /// Activate or deactivate a record
    SetStatus {
        folio: String,
        #[arg(value_parser = parse_choice::<PersonStatus>)]
        status: PersonStatus,
    },
    Delete { folio: String },
    /// Print the folio the next record would get
    NextFolio,
}

#[derive(Debug, Clone, Default, Args)]
pub struct PersonArgs {
    #[arg(long)]
    pub nombre: String,
    #[arg(long)]
    pub apellido_paterno: String,
    #[arg(long)]
    pub apellido_materno: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    /// Ten digits
    #[arg(long)]
    pub telefono: Option<String>,
    #[arg(long)]
    pub fecha_nacimiento: Option<NaiveDate>,
    /// Instructors only
    #[arg(long)]
    pub especialidad: Option<String>,
    /// Receptionists only
    #[arg(long)]
    pub turno: Option<String>,
    /// Administrators only
    #[arg(long)]
    pub usuario: Option<String>,
    /// Administrators only
    #[arg(long, env = "GYMHUB_NEW_PASSWORD", hide_env_values = true)]
    pub contrasena: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum MembershipAction {
    /// Membership types of the catalog
    Types {
        #[arg(long)]
        active: bool,
    },
    /// Payment plans
    Plans {
        #[arg(long)]
        active: bool,
    },
    /// Price a membership, optionally through a payment plan
    Quote {
        membership: String,
        #[arg(short, long)]
        plan: Option<String>,
    },
    /// Memberships assigned to clients
    List {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, value_parser = parse_choice::<MembershipStatus>)]
        status: Option<MembershipStatus>,
        #[arg(long)]
        client: Option<String>,
        /// Only active memberships ending within this many days
        #[arg(long)]
        expiring: Option<i64>,
    },
    /// Membership history of one client
    History { folio: String },
    /// Active memberships about to end
    Expiring {
        /// Window in days (defaults to the configured one)
        #[arg(long)]
        days: Option<i64>,
    },
    /// Assign a membership to a client
    Assign {
        folio: String,
        #[arg(short, long)]
        membership: String,
        #[arg(short, long)]
        plan: Option<String>,
        /// First day (defaults to today)
        #[arg(long)]
        start: Option<NaiveDate>,
        /// Also record the payment with this method
        #[arg(long, value_parser = parse_choice::<PaymentMethod>)]
        pay: Option<PaymentMethod>,
    },
    /// Renew a client membership
    Renew {
        id: String,
        #[arg(short, long)]
        plan: Option<String>,
    },
    /// Cancel a client membership
    Cancel { id: String },
}

#[derive(Debug, Subcommand)]
pub enum PaymentAction {
    List {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(long, value_parser = parse_choice::<PaymentMethod>)]
        method: Option<PaymentMethod>,
        #[arg(short, long, value_parser = parse_choice::<PaymentStatus>)]
        status: Option<PaymentStatus>,
        #[arg(long)]
        client: Option<String>,
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    /// Payments of one client
    History { folio: String },
    /// Record a payment with the next free folio
    Record {
        #[arg(long)]
        client: String,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        concept: String,
        #[arg(long, value_parser = parse_choice::<PaymentMethod>, default_value = "Efectivo")]
        method: PaymentMethod,
        #[arg(long)]
        reference: Option<String>,
    },
    /// Completed revenue per method and payment counts per status
    Summary {
        #[arg(long)]
        from: Option<NaiveDate>,
        #[arg(long)]
        to: Option<NaiveDate>,
    },
    Delete { folio: String },
}

#[derive(Debug, Subcommand)]
pub enum ProductAction {
    List {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        in_stock: bool,
        #[arg(long)]
        low_stock: bool,
    },
    Search { term: String },
    Create {
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        precio: f64,
        #[arg(long, default_value_t = 0)]
        stock: i32,
        #[arg(long)]
        stock_minimo: Option<i32>,
        #[arg(long)]
        categoria: Option<String>,
        #[arg(long)]
        descripcion: Option<String>,
    },
    /// Add to (or, with a negative delta, take from) the stock
    AdjustStock {
        id: String,
        #[arg(allow_hyphen_values = true)]
        delta: i32,
    },
    /// Products at or below their minimum stock
    LowStock,
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ActivityAction {
    List {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(long)]
        instructor: Option<String>,
        #[arg(long)]
        day: Option<String>,
        #[arg(short, long, value_parser = parse_choice::<CatalogStatus>)]
        status: Option<CatalogStatus>,
    },
    /// Classes taught by one instructor
    Instructor { folio: String },
    Create {
        #[arg(long)]
        nombre: String,
        /// `HH:MM`
        #[arg(long, value_parser = parse_time)]
        inicio: chrono::NaiveTime,
        /// `HH:MM`
        #[arg(long, value_parser = parse_time)]
        fin: chrono::NaiveTime,
        #[arg(long)]
        cupo: u32,
        #[arg(long)]
        instructor: Option<String>,
        #[arg(long)]
        dia: Option<String>,
        #[arg(long)]
        descripcion: Option<String>,
    },
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum RoutineAction {
    List {
        #[arg(short, long)]
        text: Option<String>,
        #[arg(short, long, value_parser = parse_choice::<RoutineLevel>)]
        level: Option<RoutineLevel>,
        #[arg(long)]
        instructor: Option<String>,
    },
    /// A routine with its exercises
    Get { id: String },
    Create {
        #[arg(long)]
        nombre: String,
        #[arg(long, value_parser = parse_choice::<RoutineLevel>, default_value = "Principiante")]
        nivel: RoutineLevel,
        #[arg(long)]
        objetivo: Option<String>,
        #[arg(long)]
        instructor: Option<String>,
    },
    AddExercise {
        id: String,
        #[arg(long)]
        nombre: String,
        #[arg(long)]
        series: u32,
        #[arg(long)]
        repeticiones: u32,
        #[arg(long)]
        grupo: Option<String>,
        #[arg(long)]
        descanso: Option<u32>,
    },
    RemoveExercise { id: String, exercise: String },
    Delete { id: String },
}

/// Parses a backend vocabulary value (`Activo`, `tarjeta`, ...) case-insensitively.
pub fn parse_choice<T>(value: &str) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    T::from_str(value.trim()).map_err(|e| format!("'{value}': {e}"))
}

pub fn parse_time(value: &str) -> Result<chrono::NaiveTime, String> {
    let value = value.trim();
    chrono::NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| chrono::NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|e| format!("'{value}': {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_status_in_backend_vocabulary() {
        let cli = Cli::try_parse_from(["gym", "clients", "list", "--status", "inactivo"]).unwrap();
        match cli.command {
            Commands::Clients { action: PersonAction::List { status, .. } } => {
                assert_eq!(status, Some(PersonStatus::Inactive));
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn negative_stock_delta_is_a_value() {
        let cli = Cli::try_parse_from(["gym", "products", "adjust-stock", "7", "-3"]).unwrap();
        match cli.command {
            Commands::Products { action: ProductAction::AdjustStock { id, delta } } => {
                assert_eq!(id, "7");
                assert_eq!(delta, -3);
            },
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["gym", "memberships", "cancel", "12", "-y", "-vv"]).unwrap();
        assert!(cli.yes);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn rejects_unknown_payment_method() {
        assert!(parse_choice::<PaymentMethod>("Cheque").is_err());
        assert_eq!(parse_time("07:30").unwrap().to_string(), "07:30:00");
    }
}
