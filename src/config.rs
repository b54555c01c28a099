use std::{
    env,
    fmt::{self, Display, Formatter},
    net::{AddrParseError, SocketAddr},
};

use url::Url;

pub const DEFAULT_MENU_URL: &str = "http://www.meat-market.cz/bistro/";

/// Read once at startup from `MENU_URL`, `HOST` and `PORT`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub menu_url: Url,
    pub addr: SocketAddr,
}

#[derive(Debug)]
pub enum Error {
    MenuUrl(url::ParseError),
    Addr(AddrParseError),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::MenuUrl(e) => write!(f, "MENU_URL is not a valid url: {e}"),
            Error::Addr(e) => write!(f, "HOST/PORT is not a valid address: {e}"),
        }
    }
}

impl std::error::Error for Error {}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(var: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let menu_url = var("MENU_URL").unwrap_or_else(|| {
            log::warn!("env var MENU_URL not set, using {DEFAULT_MENU_URL}");
            DEFAULT_MENU_URL.to_string()
        });
        let host = var("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = var("PORT").unwrap_or_else(|| "3000".to_string());
        Ok(Self {
            menu_url: Url::parse(&menu_url).map_err(Error::MenuUrl)?,
            addr: format!("{host}:{port}").parse().map_err(Error::Addr)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn from_map(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = from_map(&[]).unwrap();
        assert_eq!(config.menu_url.as_str(), DEFAULT_MENU_URL);
        assert_eq!(config.addr, "127.0.0.1:3000".parse().unwrap());
    }

    #[test]
    fn test_overrides() {
        let config = from_map(&[
            ("MENU_URL", "https://example.com/menu"),
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
        ])
        .unwrap();
        assert_eq!(config.menu_url.as_str(), "https://example.com/menu");
        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            from_map(&[("MENU_URL", "not a url")]),
            Err(Error::MenuUrl(_))
        ));
        assert!(matches!(
            from_map(&[("PORT", "eighty")]),
            Err(Error::Addr(_))
        ));
    }
}
