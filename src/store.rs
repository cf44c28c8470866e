use anyhow::Result;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_secretsmanager::Client;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::types::{Filter, FilterNameStringType};
use tracing::debug;

use crate::config::Settings;
use crate::errors::{ConfigError, StoreError};

/// One page of secret names from a list call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretPage {
    pub names: Vec<String>,
    /// Cursor for the following page; `None` on the last page.
    pub next_token: Option<String>,
}

/// Thin wrapper over the Secrets Manager SDK client.
///
/// The client is built once per process and only read afterwards. Retries
/// are disabled: a failed call is reported, never repeated.
pub struct SecretsManagerClient {
    client: Client,
}

impl SecretsManagerClient {
    /// Resolve AWS configuration and verify that a region and credentials exist.
    pub async fn connect(settings: &Settings) -> Result<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .retry_config(RetryConfig::disabled());

        if let Some(profile) = &settings.profile {
            loader = loader.profile_name(profile);
        }
        if let Some(region) = &settings.region {
            loader = loader.region(aws_config::Region::new(region.clone()));
        }
        if let Some(endpoint) = &settings.endpoint_url {
            debug!(endpoint = %endpoint, "using custom Secrets Manager endpoint");
            loader = loader.endpoint_url(endpoint);
        }

        let sdk_config = loader.load().await;

        if sdk_config.region().is_none() {
            return Err(ConfigError::MissingRegion.into());
        }

        let provider = sdk_config
            .credentials_provider()
            .ok_or_else(|| ConfigError::Credentials("no credential provider configured".to_string()))?;
        provider
            .provide_credentials()
            .await
            .map_err(|err| ConfigError::Credentials(DisplayErrorContext(err).to_string()))?;

        Ok(Self::with_client(Client::new(&sdk_config)))
    }

    /// Build from a ready SDK configuration (tests point this at a mock endpoint).
    pub fn from_conf(conf: aws_sdk_secretsmanager::Config) -> Self {
        Self::with_client(Client::from_conf(conf))
    }

    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Create a secret and return its ARN.
    pub async fn create_secret(&self, name: &str, value: &str) -> Result<String> {
        debug!(secret = name, "CreateSecret");
        let output = self
            .client
            .create_secret()
            .name(name)
            .secret_string(value)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_exists_exception())
                {
                    StoreError::AlreadyExists(name.to_string())
                } else {
                    StoreError::request("CreateSecret", err)
                }
            })?;

        let arn = output.arn().ok_or(StoreError::MissingField {
            operation: "CreateSecret",
            field: "ARN",
        })?;
        Ok(arn.to_string())
    }

    /// Fetch the current string value of a secret.
    pub async fn get_secret_value(&self, name: &str) -> Result<String> {
        debug!(secret = name, "GetSecretValue");
        let output = self
            .client
            .get_secret_value()
            .secret_id(name)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception())
                {
                    StoreError::NotFound(name.to_string())
                } else {
                    StoreError::request("GetSecretValue", err)
                }
            })?;

        match output.secret_string() {
            Some(value) => Ok(value.to_string()),
            None => Err(StoreError::NoStringValue(name.to_string()).into()),
        }
    }

    /// Store a new version of a secret and return its version id.
    pub async fn put_secret_value(&self, name: &str, value: &str) -> Result<String> {
        debug!(secret = name, "PutSecretValue");
        let output = self
            .client
            .put_secret_value()
            .secret_id(name)
            .secret_string(value)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(|e| e.is_resource_not_found_exception())
                {
                    StoreError::NotFound(name.to_string())
                } else {
                    StoreError::request("PutSecretValue", err)
                }
            })?;

        let version_id = output.version_id().ok_or(StoreError::MissingField {
            operation: "PutSecretValue",
            field: "VersionId",
        })?;
        Ok(version_id.to_string())
    }

    /// Fetch one page of secret names matching `filters` on all fields.
    pub async fn list_secrets_page(
        &self,
        filters: &[String],
        next_token: Option<String>,
    ) -> Result<SecretPage> {
        debug!(?filters, has_token = next_token.is_some(), "ListSecrets");
        let mut request = self.client.list_secrets().set_next_token(next_token);

        if !filters.is_empty() {
            request = request.filters(
                Filter::builder()
                    .key(FilterNameStringType::All)
                    .set_values(Some(filters.to_vec()))
                    .build(),
            );
        }

        let output = request
            .send()
            .await
            .map_err(|err| StoreError::request("ListSecrets", err))?;

        let names = output
            .secret_list()
            .iter()
            .filter_map(|entry| entry.name().map(str::to_string))
            .collect();

        Ok(SecretPage {
            names,
            next_token: output.next_token().map(str::to_string),
        })
    }
}
