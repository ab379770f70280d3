use crate::services::{prompt, render};
use anyhow::Result;
use gymhub::GymHub;

pub async fn login(hub: &GymHub, usuario: &str, contrasena: Option<String>) -> Result<()> {
    let contrasena = match contrasena {
        Some(password) => password,
        None => prompt::read_line("Contraseña")?,
    };
    let profile = hub.auth().login(usuario, &contrasena).await?;
    render::profile(&profile);
    Ok(())
}
