//! Collection paths under the API base URL and folio prefixes.

pub const CLIENTS: &str = "clientes";
pub const INSTRUCTORS: &str = "instructores";
pub const RECEPTIONISTS: &str = "recepcionistas";
pub const ADMINISTRATORS: &str = "administradores";
pub const MEMBERSHIPS: &str = "membresias";
pub const PAYMENT_PLANS: &str = "membresias/planes";
pub const CLIENT_MEMBERSHIPS: &str = "membresias-clientes";
pub const PAYMENTS: &str = "pagos";
pub const PRODUCTS: &str = "productos";
pub const ACTIVITIES: &str = "actividades";
pub const ROUTINES: &str = "rutinas";
pub const AUTH: &str = "auth";

pub const CLIENT_FOLIO_PREFIX: &str = "CLI";
pub const INSTRUCTOR_FOLIO_PREFIX: &str = "INS";
pub const RECEPTIONIST_FOLIO_PREFIX: &str = "REC";
pub const ADMINISTRATOR_FOLIO_PREFIX: &str = "ADM";
pub const PAYMENT_FOLIO_PREFIX: &str = "PAG";

/// Days billed as one month by payment plans.
pub const DAYS_PER_MONTH: u32 = 30;
