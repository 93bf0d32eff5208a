//! The `Server` header value.
//!
//! The value is process-wide configuration: it is installed at most once, normally at startup,
//! and read by header composition every time headers are computed. Responses never cache it.

use crate::ResponseError;
use http::HeaderValue;
use once_cell::sync::OnceCell;
use std::fmt;
use tracing::debug;

static SERVER_IDENT: OnceCell<ServerIdent> = OnceCell::new();

const FRAMEWORK_IDENT: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

/// Identifies the framework in the `Server` header, formatted as `"<name> <version>"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerIdent {
    text: String,
    value: HeaderValue,
}

impl ServerIdent {
    /// Creates an ident from a framework name and version.
    ///
    /// # Errors
    ///
    /// Returns [`ResponseError::InvalidHeaderValue`] if the name or version is blank, or the
    /// resulting text is not a legal header value.
    pub fn new(name: &str, version: &str) -> Result<Self, ResponseError> {
        if name.trim().is_empty() {
            return Err(ResponseError::invalid_header_value("server name must not be empty"));
        }
        if version.trim().is_empty() {
            return Err(ResponseError::invalid_header_value("server version must not be empty"));
        }

        let text = format!("{name} {version}");
        let value = HeaderValue::from_str(&text)?;
        Ok(Self { text, value })
    }

    /// The ident of this crate, used when nothing else was installed.
    pub fn framework() -> Self {
        Self { text: FRAMEWORK_IDENT.to_owned(), value: HeaderValue::from_static(FRAMEWORK_IDENT) }
    }

    /// Installs this ident as the process-wide `Server` value.
    ///
    /// Succeeds only once, and only before the first call to [`ServerIdent::global`].
    /// On failure the rejected ident is handed back.
    pub fn install(self) -> Result<(), ServerIdent> {
        install_into(&SERVER_IDENT, self)
    }

    /// Returns the installed ident, falling back to [`ServerIdent::framework`].
    pub fn global() -> &'static ServerIdent {
        resolve(&SERVER_IDENT)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn header_value(&self) -> &HeaderValue {
        &self.value
    }
}

impl Default for ServerIdent {
    fn default() -> Self {
        Self::framework()
    }
}

impl fmt::Display for ServerIdent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

fn install_into(cell: &OnceCell<ServerIdent>, ident: ServerIdent) -> Result<(), ServerIdent> {
    let text = ident.text.clone();
    cell.set(ident)?;
    debug!(server = %text, "server ident installed");
    Ok(())
}

fn resolve(cell: &OnceCell<ServerIdent>) -> &ServerIdent {
    cell.get_or_init(ServerIdent::framework)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let ident = ServerIdent::new("micro-http", "1.2.3").unwrap();
        assert_eq!(ident.as_str(), "micro-http 1.2.3");
        assert_eq!(ident.header_value(), "micro-http 1.2.3");
        assert_eq!(ident.to_string(), "micro-http 1.2.3");
    }

    #[test]
    fn test_new_rejects_invalid_values() {
        assert!(matches!(ServerIdent::new("", "1.0"), Err(ResponseError::InvalidHeaderValue { .. })));
        assert!(matches!(ServerIdent::new("micro\r\nX-Evil: 1", "1.0"), Err(ResponseError::InvalidHeaderValue { .. })));
    }

    #[test]
    fn test_new_rejects_blank_version() {
        for version in ["", "   "] {
            match ServerIdent::new("micro-http", version) {
                Err(ResponseError::InvalidHeaderValue { reason }) => assert!(reason.contains("version")),
                other => panic!("unexpected result: {other:?}"),
            }
        }
    }

    #[test]
    fn test_framework_ident() {
        let ident = ServerIdent::framework();
        assert!(ident.as_str().starts_with("micro-response "));
        assert_eq!(ident.as_str(), format!("micro-response {}", env!("CARGO_PKG_VERSION")));
        assert_eq!(ident, ServerIdent::default());
    }

    #[test]
    fn test_install_once() {
        let cell = OnceCell::new();
        let first = ServerIdent::new("first", "1").unwrap();
        let second = ServerIdent::new("second", "2").unwrap();

        assert!(install_into(&cell, first).is_ok());
        let rejected = install_into(&cell, second).unwrap_err();
        assert_eq!(rejected.as_str(), "second 2");
        assert_eq!(resolve(&cell).as_str(), "first 1");
    }

    #[test]
    fn test_install_after_read_is_rejected() {
        let cell = OnceCell::new();
        assert_eq!(resolve(&cell), &ServerIdent::framework());

        let late = ServerIdent::new("late", "0").unwrap();
        assert!(install_into(&cell, late).is_err());
        assert_eq!(resolve(&cell), &ServerIdent::framework());
    }

    #[test]
    fn test_global_is_stable() {
        let ident = ServerIdent::global();
        assert!(!ident.as_str().is_empty());
        assert!(std::ptr::eq(ident, ServerIdent::global()));
        assert!(ServerIdent::framework().install().is_err());
    }
}
