//! Connection-string parsing for the database source.

use std::fmt;
use std::str::FromStr;

use super::ConfigError;

/// SQL dialect selected by the connection-string scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Postgres,
    MySql,
}

impl Dialect {
    fn from_scheme(scheme: &str) -> Option<Self> {
        match scheme {
            "postgres" => Some(Self::Postgres),
            "mysql" => Some(Self::MySql),
            _ => None,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Dialect::Postgres => "postgres",
            Dialect::MySql => "mysql",
        })
    }
}

/// A parsed `<scheme>://<credentials>@<host>:<port>/<database>` string.
#[derive(Clone, PartialEq, Eq)]
pub struct Dsn {
    dialect: Dialect,
    url: String,
    database: String,
}

impl Dsn {
    pub fn parse(dsn: &str) -> Result<Self, ConfigError> {
        let (scheme, rest) = dsn
            .split_once("://")
            .ok_or_else(|| ConfigError::UnsupportedDialect(dsn_scheme_hint(dsn)))?;
        let dialect = Dialect::from_scheme(scheme)
            .ok_or_else(|| ConfigError::UnsupportedDialect(scheme.to_string()))?;

        // Credentials may contain '/', so the path starts after the last '@'.
        let host_and_path = rest.rsplit_once('@').map_or(rest, |(_, tail)| tail);
        let path = host_and_path
            .split(['?', '#'])
            .next()
            .and_then(|location| location.split_once('/'))
            .map_or("", |(_, path)| path);
        let database = path
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .unwrap_or_default();

        if database.is_empty() {
            return Err(ConfigError::MissingDatabaseName(redact(dsn)));
        }

        Ok(Self {
            dialect,
            url: dsn.to_string(),
            database: database.to_string(),
        })
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    /// Full connection string, credentials included.
    pub fn as_str(&self) -> &str {
        &self.url
    }

    /// Connection string with credentials masked, safe for logs.
    pub fn redacted(&self) -> String {
        redact(&self.url)
    }
}

impl FromStr for Dsn {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dsn")
            .field("dialect", &self.dialect)
            .field("url", &self.redacted())
            .field("database", &self.database)
            .finish()
    }
}

impl fmt::Display for Dsn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.redacted())
    }
}

/// Masks everything before the last '@' of the authority.
pub(crate) fn redact(dsn: &str) -> String {
    let (scheme, rest) = match dsn.split_once("://") {
        Some((scheme, rest)) => (format!("{scheme}://"), rest),
        None => (String::new(), dsn),
    };
    match rest.rsplit_once('@') {
        Some((_, tail)) => format!("{scheme}***@{tail}"),
        None => format!("{scheme}{rest}"),
    }
}

fn dsn_scheme_hint(dsn: &str) -> String {
    dsn.split([':', '/', '@']).next().unwrap_or_default().to_string()
}
