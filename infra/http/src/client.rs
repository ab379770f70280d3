use crate::error::{ApiError, ApiErrorExt, extract_backend_message};
use gymhub_domain::config::ApiConfig;
use reqwest::{Method, RequestBuilder, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

const USER_AGENT: &str = concat!("gymhub/", env!("CARGO_PKG_VERSION"));

/// JSON client bound to the backend base URL.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    /// Builds a client from the `[api]` config section.
    ///
    /// # Errors
    /// Returns [`ApiError::InvalidUrl`] for an unusable base URL and
    /// [`ApiError::Connection`] when the HTTP stack cannot be initialised.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let base = Url::parse(config.base_url.trim()).map_err(|e| ApiError::InvalidUrl {
            url: config.base_url.clone(),
            message: e.to_string(),
        })?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidUrl {
                url: config.base_url.clone(),
                message: "URL cannot have path segments".to_owned(),
            });
        }

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .context("Failed to build HTTP client")?;

        debug!(base = %base, "API client ready");
        Ok(Self { http, base })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolves `path` (`"membresias-clientes/12/renovar"`) below the base URL.
    ///
    /// Every segment is percent-encoded, so folios and ids can be passed verbatim.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl {
                url: self.base.to_string(),
                message: "URL cannot have path segments".to_owned(),
            })?
            .pop_if_empty()
            .extend(path.split('/').filter(|segment| !segment.is_empty()));
        Ok(url)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (request, what) = self.request(Method::GET, path)?;
        let body = send(request, &what).await?;
        decode(&body, what)
    }

    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let (request, what) = self.request(Method::GET, path)?;
        let body = send(request.query(query), &what).await?;
        decode(&body, what)
    }

    pub async fn post<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (request, what) = self.request(Method::POST, path)?;
        let body = send(request.json(payload), &what).await?;
        decode(&body, what)
    }

    pub async fn put<B, T>(&self, path: &str, payload: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let (request, what) = self.request(Method::PUT, path)?;
        let body = send(request.json(payload), &what).await?;
        decode(&body, what)
    }

    /// `PUT` without a body, used for state transitions such as cancellations.
    pub async fn put_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let (request, what) = self.request(Method::PUT, path)?;
        let body = send(request, &what).await?;
        decode(&body, what)
    }

    /// `DELETE`; any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let (request, what) = self.request(Method::DELETE, path)?;
        send(request, &what).await.map(|_| ())
    }

    fn request(&self, method: Method, path: &str) -> Result<(RequestBuilder, String), ApiError> {
        let url = self.endpoint(path)?;
        let what = format!("{method} {}", url.path());
        Ok((self.http.request(method, url), what))
    }
}

async fn send(request: RequestBuilder, what: &str) -> Result<Vec<u8>, ApiError> {
    debug!(request = %what, "Sending request");

    let response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            warn!(request = %what, error = %e, "Backend unreachable");
            return Err(e).context(what.to_owned());
        },
    };

    let status = response.status();
    let body = response.bytes().await.context(what.to_owned())?;

    if status.is_success() {
        debug!(request = %what, status = status.as_u16(), bytes = body.len(), "Response received");
        return Ok(body.to_vec());
    }

    let message = extract_backend_message(&String::from_utf8_lossy(&body));
    warn!(request = %what, status = status.as_u16(), message = ?message, "Request rejected");
    Err(ApiError::Status { status: status.as_u16(), message, context: Some(what.to_owned().into()) })
}

fn decode<T: DeserializeOwned>(body: &[u8], what: String) -> Result<T, ApiError> {
    // Some endpoints answer mutations with an empty body.
    let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) { b"null" } else { body };
    serde_json::from_slice(body).context(what)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> Result<ApiClient, ApiError> {
        ApiClient::new(&ApiConfig { base_url: base_url.to_owned(), ..ApiConfig::default() })
    }

    #[test]
    fn endpoints_join_below_base_path() {
        let api = client("http://localhost:8081/api").unwrap();
        assert_eq!(api.endpoint("clientes").unwrap().as_str(), "http://localhost:8081/api/clientes");
        assert_eq!(
            api.endpoint("/membresias-clientes/12/renovar").unwrap().as_str(),
            "http://localhost:8081/api/membresias-clientes/12/renovar"
        );

        let trailing = client("http://localhost:8081/api/").unwrap();
        assert_eq!(trailing.endpoint("pagos").unwrap().path(), "/api/pagos");
    }

    #[test]
    fn segments_are_encoded() {
        let api = client("http://localhost:8081/api").unwrap();
        assert_eq!(api.endpoint("productos/agua 1L").unwrap().path(), "/api/productos/agua%201L");
    }

    #[test]
    fn rejects_bad_base_urls() {
        assert!(matches!(client("not a url"), Err(ApiError::InvalidUrl { .. })));
        assert!(matches!(client("mailto:admin@gym.mx"), Err(ApiError::InvalidUrl { .. })));
    }

    #[test]
    fn empty_bodies_decode_as_null() {
        let unit: Option<u32> = decode(b"", "GET /x".to_owned()).unwrap();
        assert_eq!(unit, None);
        let err = decode::<u32>(b"{", "GET /x".to_owned()).unwrap_err();
        assert_eq!(err.kind(), "Decode");
    }
}
