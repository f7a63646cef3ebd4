use std::{env, fmt::Display, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub geojson_path: String,
    pub db: DbConfig,
}

/// Connection parameters for the listings database.
#[derive(Clone)]
pub struct DbConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "1111"),
            geojson_path: try_load("GEOJSON_PATH", "seed/denver_neighborhoods.geojson"),
            db: DbConfig::load(),
        }
    }
}

impl DbConfig {
    pub fn load() -> Self {
        Self {
            name: try_load("DB_NAME", "denver"),
            user: try_load("DB_USER", "postgres"),
            password: try_load("DB_PASSWORD", ""),
            host: try_load("DB_HOST", "localhost"),
            port: try_load("DB_PORT", "5432"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn try_load_falls_back_to_default() {
        let port: u16 = try_load("DENVER_LISTINGS_TEST_UNSET_PORT", "5432");
        assert_eq!(port, 5432);
    }

    #[test]
    fn try_load_parses_strings_verbatim() {
        let host: String = try_load("DENVER_LISTINGS_TEST_UNSET_HOST", "localhost");
        assert_eq!(host, "localhost");
    }
}
