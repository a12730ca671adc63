//! Portal Session
//!
//! Wraps a cookie-bearing HTTP client that has logged into the supervision
//! portal. The session is created once at startup and never renewed; the
//! portal keeps it alive through the cookie jar for the process lifetime.

use reqwest::Client;
use tracing::{debug, info};

use crate::error::{ExporterError, Result};

/// Base URL of the supervision portal.
const PORTAL_BASE_URL: &str = "https://supervision.beemotechnologie.com";

/// Login form endpoint, relative to the portal base.
const LOGIN_PATH: &str = "/user/login";

/// Authenticated connection to the portal.
pub struct PortalSession {
    client: Client,
}

impl PortalSession {
    /// Logs into the portal with form credentials.
    ///
    /// The portal answers a rejected login by redirecting back to the login
    /// page, so the final response URL landing on `LOGIN_PATH` means the
    /// credentials were refused. There is no retry.
    pub async fn login(username: &str, password: &str) -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;

        let login_url = format!("{}{}", PORTAL_BASE_URL, LOGIN_PATH);
        let response = client
            .post(&login_url)
            .form(&[("login", username), ("password", password)])
            .send()
            .await?
            .error_for_status()?;

        if response.url().path() == LOGIN_PATH {
            return Err(ExporterError::LoginRejected(username.to_string()));
        }

        info!(user = username, "portal login succeeded");
        Ok(Self { client })
    }

    /// Downloads one CSV export through the authenticated session.
    ///
    /// The portal serves exports as ISO-8859-1; the body is decoded to UTF-8
    /// before parsing.
    pub async fn fetch_export(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", PORTAL_BASE_URL, path);
        debug!(url = %url, "fetching export");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;

        Ok(decode_latin1(&bytes))
    }
}

/// Decodes ISO-8859-1 bytes into a UTF-8 string.
///
/// ISO-8859-1 maps byte-for-byte onto the first 256 Unicode code points, so
/// every byte becomes the char with the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}
