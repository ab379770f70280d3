use gymhub_derive::{api_model, gymhub_error};
use std::borrow::Cow;

#[gymhub_error]
pub enum SampleError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[api_model]
struct ClienteDemo {
    folio_cliente: String,
    fecha_registro: Option<String>,
}

fn decode(raw: &str) -> Result<ClienteDemo, SampleError> {
    serde_json::from_str::<ClienteDemo>(raw).context("decoding cliente")
}

#[test]
fn context_is_attached_to_source_errors() {
    let err = decode("{not json").unwrap_err();
    assert_eq!(err.kind(), "Decode");
    assert!(err.to_string().starts_with("Decode error (decoding cliente):"));
}

#[test]
fn context_can_be_replaced_on_own_errors() {
    let res: Result<(), SampleError> = Err("missing folio".into());
    let err = res.context("creating cliente").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (creating cliente): missing folio");
}

#[test]
fn question_mark_converts_sources() {
    fn parse() -> Result<serde_json::Value, SampleError> {
        Ok(serde_json::from_str("[")?)
    }
    let err = parse().unwrap_err();
    assert!(matches!(err, SampleError::Decode { context: None, .. }));
}

#[test]
fn api_model_uses_camel_case_and_tolerates_unknown_fields() {
    let raw = r#"{"folioCliente":"CLI001","fechaRegistro":null,"extra":true}"#;
    let parsed: ClienteDemo = serde_json::from_str(raw).unwrap();
    assert_eq!(parsed.folio_cliente, "CLI001");
    assert!(parsed.fecha_registro.is_none());

    let back = serde_json::to_value(parsed.clone()).unwrap();
    assert_eq!(back["folioCliente"], "CLI001");
}
