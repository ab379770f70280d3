//! Form rules for every record the operator can create or edit.

use super::{Validate, ValidationErrors};
use gymhub_domain::{
    Activity, Administrator, AssignMembership, Client, Exercise, Instructor, Membership, Payment,
    PaymentPlan, Person, Product, Receptionist, RenewMembership, Routine,
};

fn person_errors<P: Person>(person: &P) -> ValidationErrors {
    let (paternal, _) = person.last_names();
    let mut errors = ValidationErrors::new();
    errors
        .require_text("nombre", person.first_name())
        .require_text("apellidoPaterno", paternal)
        .optional_email("email", person.email())
        .optional_phone("telefono", person.phone());
    errors
}

macro_rules! validate_person {
    ($($ty:ty),+) => {
        $(
            impl Validate for $ty {
                fn validate(&self) -> Result<(), ValidationErrors> {
                    person_errors(self).into_result()
                }
            }
        )+
    };
}

validate_person!(Client, Instructor, Receptionist);

impl Validate for Administrator {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = person_errors(self);
        errors.require_text("usuario", &self.usuario);
        if let Some(password) = &self.contrasena {
            errors.check(password.chars().count() >= 6, "contrasena", "must have at least 6 characters");
        }
        errors.into_result()
    }
}

impl Validate for Membership {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("nombre", &self.nombre)
            .positive("precio", self.precio)
            .check(self.duracion_dias > 0, "duracionDias", "must be greater than zero");
        errors.into_result()
    }
}

impl Validate for PaymentPlan {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("nombre", &self.nombre)
            .check(
                self.factor_descuento > 0.0 && self.factor_descuento <= 1.0,
                "factorDescuento",
                "must be greater than 0 and at most 1",
            )
            .check(self.duracion_dias > 0, "duracionDias", "must be greater than zero");
        errors.into_result()
    }
}

impl Validate for AssignMembership {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("folioCliente", &self.folio_cliente)
            .check(self.fecha_fin > self.fecha_inicio, "fechaFin", "must be after the start date")
            .check(
                self.precio_final.is_finite() && self.precio_final >= 0.0,
                "precioFinal",
                "cannot be negative",
            );
        errors.into_result()
    }
}

impl Validate for RenewMembership {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .check(self.fecha_fin > self.fecha_inicio, "fechaFin", "must be after the start date")
            .check(
                self.precio_final.is_finite() && self.precio_final >= 0.0,
                "precioFinal",
                "cannot be negative",
            );
        errors.into_result()
    }
}

impl Validate for Payment {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("folioCliente", &self.folio_cliente)
            .positive("monto", self.monto)
            .require_text("concepto", &self.concepto);
        errors.into_result()
    }
}

impl Validate for Product {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("nombre", &self.nombre)
            .positive("precio", self.precio)
            .non_negative("stock", self.stock.into())
            .non_negative("stockMinimo", self.stock_minimo.unwrap_or_default().into());
        errors.into_result()
    }
}

impl Validate for Activity {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("nombre", &self.nombre)
            .check(self.cupo_maximo > 0, "cupoMaximo", "must be greater than zero")
            .check(self.hora_inicio < self.hora_fin, "horaFin", "must be after the start time")
            .check(self.inscritos <= self.cupo_maximo, "inscritos", "cannot exceed the capacity");
        errors.into_result()
    }
}

impl Validate for Exercise {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors
            .require_text("nombre", &self.nombre)
            .check(self.series > 0, "series", "must be greater than zero")
            .check(self.repeticiones > 0, "repeticiones", "must be greater than zero");
        errors.into_result()
    }
}

impl Validate for Routine {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("nombre", &self.nombre);
        for (index, exercise) in self.ejercicios.iter().enumerate() {
            if let Err(invalid) = exercise.validate() {
                for error in invalid.errors() {
                    errors.add("ejercicios", format!("#{} {error}", index + 1));
                }
            }
        }
        errors.into_result()
    }
}
