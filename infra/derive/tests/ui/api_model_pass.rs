use gymhub_derive::api_model;

#[api_model]
pub struct Producto {
    pub nombre: String,
    pub precio_venta: f64,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = true)]
pub struct Strict {
    pub some_field: u32,
}

fn main() {
    let p = Producto { nombre: "Agua".to_owned(), precio_venta: 15.0 };
    let _copy = p.clone();
}
