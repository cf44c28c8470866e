use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::errors::EditorError;
use crate::store;

#[async_trait]
pub trait SecretStore: Send + Sync {
    async fn create_secret(&self, name: &str, value: &str) -> Result<String>;
    async fn get_secret_value(&self, name: &str) -> Result<String>;
    async fn put_secret_value(&self, name: &str, value: &str) -> Result<String>;
    async fn list_secrets_page(
        &self,
        filters: &[String],
        next_token: Option<String>,
    ) -> Result<store::SecretPage>;
}

pub struct RealSecretStore {
    inner: store::SecretsManagerClient,
}

impl RealSecretStore {
    pub fn new(inner: store::SecretsManagerClient) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl SecretStore for RealSecretStore {
    async fn create_secret(&self, name: &str, value: &str) -> Result<String> {
        self.inner.create_secret(name, value).await
    }

    async fn get_secret_value(&self, name: &str) -> Result<String> {
        self.inner.get_secret_value(name).await
    }

    async fn put_secret_value(&self, name: &str, value: &str) -> Result<String> {
        self.inner.put_secret_value(name, value).await
    }

    async fn list_secrets_page(
        &self,
        filters: &[String],
        next_token: Option<String>,
    ) -> Result<store::SecretPage> {
        self.inner.list_secrets_page(filters, next_token).await
    }
}

/// Opens a file in an editor and waits for the editor to finish.
#[async_trait]
pub trait EditorLauncher: Send + Sync {
    async fn launch(&self, path: &Path) -> Result<()>;
}

/// Runs an external program with the file path as its only argument.
pub struct RealEditor {
    program: String,
}

impl RealEditor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

#[async_trait]
impl EditorLauncher for RealEditor {
    async fn launch(&self, path: &Path) -> Result<()> {
        debug!(editor = %self.program, path = %path.display(), "launching editor");

        // stdio is inherited, the editor owns the terminal until it exits
        let status = tokio::process::Command::new(&self.program)
            .arg(path)
            .status()
            .await
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => EditorError::NotFound {
                    program: self.program.clone(),
                },
                _ => EditorError::Spawn {
                    program: self.program.clone(),
                    source: err,
                },
            })?;

        if !status.success() {
            return Err(EditorError::Failed {
                program: self.program.clone(),
                code: status.code(),
            }
            .into());
        }

        Ok(())
    }
}
