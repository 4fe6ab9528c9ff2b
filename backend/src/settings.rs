//! Listener configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USER_SERVICE_*` environment variables, or
//! a configuration file, in that order of precedence.

use std::io;
use std::net::{SocketAddr, ToSocketAddrs};

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

/// Interface bound when none is configured.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Port bound when none is configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Errors raised while turning settings into a socket address.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The host and port did not resolve.
    #[error("cannot resolve {host}:{port}: {source}")]
    Resolve {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },
    /// Resolution succeeded but produced no addresses.
    #[error("{host}:{port} resolved to no addresses")]
    NoAddress { host: String, port: u16 },
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_SERVICE")]
pub struct ServerSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// TCP port to bind.
    pub port: Option<u16>,
}

impl ServerSettings {
    /// Return the configured host, falling back to [`DEFAULT_HOST`].
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured port, falling back to [`DEFAULT_PORT`].
    pub fn port(&self) -> u16 {
        self.port.unwrap_or(DEFAULT_PORT)
    }

    /// Resolve host and port to the first matching socket address.
    ///
    /// # Errors
    /// Returns [`SettingsError`] when the host cannot be resolved.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let (host, port) = (self.host(), self.port());
        let mut addrs = (host, port)
            .to_socket_addrs()
            .map_err(|source| SettingsError::Resolve {
                host: host.to_owned(),
                port,
                source,
            })?;
        addrs.next().ok_or_else(|| SettingsError::NoAddress {
            host: host.to_owned(),
            port,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for listener configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("user-service")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", None::<String>),
            ("USER_SERVICE_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(
            settings.bind_addr().expect("default address resolves"),
            SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT))
        );
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USER_SERVICE_HOST", Some("127.0.0.1".to_owned())),
            ("USER_SERVICE_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.port(), 9090);
        assert_eq!(
            settings.bind_addr().expect("override resolves"),
            SocketAddr::from(([127, 0, 0, 1], 9090))
        );
    }

    #[rstest]
    fn unresolvable_host_is_reported() {
        let settings = ServerSettings {
            host: Some("not a host name".to_owned()),
            port: Some(1),
        };

        let err = settings.bind_addr().expect_err("host should not resolve");
        assert!(err.to_string().contains("not a host name"));
    }
}
