mod auth;
mod membership;
mod payment;
mod people;
mod training;

pub use auth::{LoginRequest, UserProfile};
pub use membership::{AssignMembership, ClientMembership, Membership, PaymentPlan, RenewMembership};
pub use payment::{Payment, Product};
pub use people::{Administrator, Client, Instructor, Person, Receptionist};
pub use training::{Activity, Exercise, Routine};
