//! Supabase service client capability
//!
//! The data API only exposes table queries and RPC calls, so the client can
//! never run arbitrary DDL. Its one job here is to be probed: the reporter
//! asks it whether a migration could be applied automatically, and the
//! answer is always no.

use crate::config::Config;
use crate::error::{CoreError, CoreResult};

/// Name of the capability as reported on the missing-dependency path
pub const CLIENT_CAPABILITY: &str = "service-client";

/// Path of the PostgREST data API relative to the project URL
pub const REST_PATH: &str = "rest/v1/";

/// Whether this build can talk to the service at all
#[derive(Debug)]
pub enum ClientCapability {
    /// Client compiled in and constructed from the configuration
    Available(ServiceClient),

    /// Client not compiled into this build
    Unavailable { capability: String },
}

impl ClientCapability {
    /// Select the capability for this build.
    ///
    /// Fails only when the client is compiled in and the configured URL is
    /// unusable.
    pub fn detect(config: &Config) -> CoreResult<Self> {
        Self::detect_with(config, cfg!(feature = "service-client"))
    }

    /// Select the capability given whether the client is compiled in
    pub(crate) fn detect_with(config: &Config, compiled: bool) -> CoreResult<Self> {
        if compiled {
            ServiceClient::new(config).map(Self::Available)
        } else {
            Ok(Self::Unavailable {
                capability: CLIENT_CAPABILITY.to_string(),
            })
        }
    }
}

/// Result of asking the client whether it can execute a migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The client only reaches `endpoint`, which cannot run DDL
    DdlUnsupported { endpoint: String },
}

/// Handle on the remote service. Holds credentials; performs no I/O.
#[derive(Clone)]
pub struct ServiceClient {
    rest_endpoint: String,
    service_role_key: String,
}

impl std::fmt::Debug for ServiceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceClient")
            .field("rest_endpoint", &self.rest_endpoint)
            .finish_non_exhaustive()
    }
}

impl ServiceClient {
    /// Build a client from validated configuration
    pub fn new(config: &Config) -> CoreResult<Self> {
        let rest_endpoint = rest_endpoint(&config.supabase_url)?;
        log::debug!("Service client targets {}", rest_endpoint);
        Ok(Self {
            rest_endpoint,
            service_role_key: config.service_role_key.clone(),
        })
    }

    /// Check whether `sql` could be executed through this client.
    ///
    /// Inspects the endpoint only; nothing is sent to the service.
    pub fn probe(&self, sql: &str) -> ProbeOutcome {
        log::debug!(
            "Probing {} for {} bytes of SQL (service-role key {})",
            self.rest_endpoint,
            sql.len(),
            if self.service_role_key.is_empty() {
                "missing"
            } else {
                "present"
            }
        );
        ProbeOutcome::DdlUnsupported {
            endpoint: self.rest_endpoint.clone(),
        }
    }
}

#[cfg(feature = "service-client")]
fn rest_endpoint(raw: &str) -> CoreResult<String> {
    let invalid = |reason: String| CoreError::InvalidServiceUrl {
        url: raw.to_string(),
        reason,
    };

    let mut base = url::Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(base.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", base.scheme())));
    }
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    let endpoint = base.join(REST_PATH).map_err(|e| invalid(e.to_string()))?;
    Ok(endpoint.to_string())
}

#[cfg(not(feature = "service-client"))]
fn rest_endpoint(_raw: &str) -> CoreResult<String> {
    Err(CoreError::ClientUnavailable {
        capability: CLIENT_CAPABILITY.to_string(),
    })
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
