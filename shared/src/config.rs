use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Connection string checked before the environment, so a local checkout
/// can point at its own database without exporting anything. The file is
/// gitignored.
const PRIVATE_DATABASE_CONFIG: &str = "config/database.private";
const DATABASE_URL_ENV: &str = "DATABASE_URL";

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        Ok(Self {
            database: DatabaseConfig::load()?,
            server: ServerConfig::load(),
        })
    }
}

pub struct DatabaseConfig {
    pub connection_string: String,
}

impl DatabaseConfig {
    fn load() -> Result<Self> {
        if let Some(url) = read_private_config(Path::new(PRIVATE_DATABASE_CONFIG))? {
            return Ok(Self {
                connection_string: url,
            });
        }
        match env::var(DATABASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Ok(Self {
                connection_string: url.trim().to_string(),
            }),
            _ => bail!(
                "database connection string is not configured: \
                 create {PRIVATE_DATABASE_CONFIG} or set {DATABASE_URL_ENV}"
            ),
        }
    }
}

fn read_private_config(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    fn load() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);
        Self { host, port }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("library-config-{name}-{}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn private_config_is_trimmed() {
        let path = temp_file("trimmed", "  postgres://localhost/catalog\n");
        let url = read_private_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(url.as_deref(), Some("postgres://localhost/catalog"));
    }

    #[test]
    fn blank_private_config_counts_as_absent() {
        let path = temp_file("blank", "   \n");
        let url = read_private_config(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(url, None);
    }

    #[test]
    fn missing_private_config_counts_as_absent() {
        let path = env::temp_dir().join("library-config-does-not-exist");
        assert_eq!(read_private_config(&path).unwrap(), None);
    }
}
