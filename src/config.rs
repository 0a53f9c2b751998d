use std::path::PathBuf;

use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3030".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            catalog_path: std::env::var("CATALOG_PATH")
                .unwrap_or_else(|_| "data/products.json".to_string())
                .into(),
        })
    }
}
