//! Binding of each record type to its backend collection.

use crate::constants;
use crate::id::RecordId;
use crate::models::{
    Activity, Administrator, Client, ClientMembership, Instructor, Membership, Payment,
    PaymentPlan, Product, Receptionist, Routine,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A record type served by a backend collection at `{base}/{PATH}`.
pub trait Resource: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Collection path below the API base (`"clientes"`).
    const PATH: &'static str;
    /// Singular name used in logs and messages.
    const NAME: &'static str;

    /// Natural key of the record (folio or id); `None` until the backend assigns one.
    fn key(&self) -> Option<String>;
}

fn folio_key(folio: &str) -> Option<String> {
    let folio = folio.trim();
    (!folio.is_empty()).then(|| folio.to_owned())
}

fn id_key(id: Option<&RecordId>) -> Option<String> {
    id.map(ToString::to_string)
}

macro_rules! resource {
    ($ty:ty, $path:expr, $name:literal, folio) => {
        impl Resource for $ty {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;

            fn key(&self) -> Option<String> {
                folio_key(&self.folio)
            }
        }
    };
    ($ty:ty, $path:expr, $name:literal, id) => {
        impl Resource for $ty {
            const PATH: &'static str = $path;
            const NAME: &'static str = $name;

            fn key(&self) -> Option<String> {
                id_key(self.id.as_ref())
            }
        }
    };
}

resource!(Client, constants::CLIENTS, "client", folio);
resource!(Instructor, constants::INSTRUCTORS, "instructor", folio);
resource!(Receptionist, constants::RECEPTIONISTS, "receptionist", folio);
resource!(Administrator, constants::ADMINISTRATORS, "administrator", folio);
resource!(Payment, constants::PAYMENTS, "payment", folio);
resource!(Membership, constants::MEMBERSHIPS, "membership", id);
resource!(PaymentPlan, constants::PAYMENT_PLANS, "payment plan", id);
resource!(ClientMembership, constants::CLIENT_MEMBERSHIPS, "client membership", id);
resource!(Product, constants::PRODUCTS, "product", id);
resource!(Activity, constants::ACTIVITIES, "activity", id);
resource!(Routine, constants::ROUTINES, "routine", id);
