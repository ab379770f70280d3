use crate::error::{AuthError, AuthErrorExt};
use crate::session::Session;
use gymhub_domain::constants::AUTH;
use gymhub_domain::{LoginRequest, UserProfile};
use gymhub_http::ApiClient;
use gymhub_kernel::validation::ValidationErrors;
use tracing::{info, warn};

/// Operator login against `auth/login`.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: ApiClient,
    session: Session,
}

impl AuthService {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self::with_session(api, Session::new())
    }

    #[must_use]
    pub const fn with_session(api: ApiClient, session: Session) -> Self {
        Self { api, session }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Signs in and keeps the returned profile in the session.
    ///
    /// A failed attempt leaves any existing session untouched.
    pub async fn login(&self, usuario: &str, contrasena: &str) -> Result<UserProfile, AuthError> {
        let mut errors = ValidationErrors::new();
        errors.require_text("usuario", usuario).require_text("contrasena", contrasena);
        errors.into_result()?;

        let request = LoginRequest { usuario: usuario.trim().to_owned(), contrasena: contrasena.to_owned() };
        let profile: UserProfile = match self.api.post(&format!("{AUTH}/login"), &request).await {
            Ok(profile) => profile,
            Err(e) => {
                warn!(usuario = %request.usuario, status = ?e.status(), "Login failed");
                return Err(e).context("Login failed");
            },
        };

        info!(usuario = %profile.usuario, rol = %profile.rol, "Signed in");
        self.session.set(profile.clone());
        Ok(profile)
    }

    pub fn logout(&self) -> Option<UserProfile> {
        let previous = self.session.clear();
        if let Some(profile) = &previous {
            info!(usuario = %profile.usuario, "Signed out");
        }
        previous
    }

    /// The signed-in profile, or [`AuthError::Unauthenticated`].
    pub fn require_session(&self) -> Result<UserProfile, AuthError> {
        self.session.current().ok_or_else(|| AuthError::Unauthenticated {
            message: "no operator is signed in".into(),
            context: None,
        })
    }
}
