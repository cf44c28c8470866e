use anyhow::{Context, Result};
use colored::*;
use std::io::{self, Write};
use tracing::{debug, info};

use crate::app_deps::{EditorLauncher, RealEditor, RealSecretStore, SecretStore};
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::constants;
use crate::edit;
use crate::error::format_error_chain;
use crate::store::SecretsManagerClient;
use crate::validation;
use crate::view;

/// Outcome of one operation on one secret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationResult {
    pub secret_name: String,
    pub success: bool,
    /// ARN after a create, version id after an edit.
    pub identifier: Option<String>,
    pub error: Option<String>,
}

impl OperationResult {
    pub fn new_success(secret_name: String, identifier: Option<String>) -> Self {
        Self {
            secret_name,
            success: true,
            identifier,
            error: None,
        }
    }

    pub fn new_failure(secret_name: String, error: String) -> Self {
        Self {
            secret_name,
            success: false,
            identifier: None,
            error: Some(error),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    pub fn is_failure(&self) -> bool {
        !self.success
    }
}

pub struct App;

impl App {
    /// Run the command selected on the command line against the real store
    /// and editor.
    ///
    /// Returns `Ok(false)` when at least one per-secret operation failed.
    /// Errors are reserved for failures that stop everything: the store
    /// connection could not be set up, or stdout is gone.
    pub async fn run(cli: Cli) -> Result<bool> {
        let command = cli.command();
        let mut out = io::stdout();
        let mut err = io::stderr();

        if command == Command::Usage {
            writeln!(out, "{}", constants::cli::USAGE)?;
            return Ok(true);
        }

        let settings = Settings::from_env().with_overrides(cli.profile, cli.region);
        debug!(?settings, "resolved settings");

        let client = SecretsManagerClient::connect(&settings)
            .await
            .context("Failed to set up AWS Secrets Manager client")?;
        let store = RealSecretStore::new(client);
        let editor = RealEditor::new(settings.editor);

        let results = Self::run_with_deps(&store, &editor, command, &mut out, &mut err).await?;
        Ok(Self::all_succeeded(&results))
    }

    /// Dispatch a command using the given store and editor, writing results
    /// to `out` and per-secret errors to `err`.
    pub async fn run_with_deps(
        store: &dyn SecretStore,
        editor: &dyn EditorLauncher,
        command: Command,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Vec<OperationResult>> {
        match command {
            Command::Edit { name } => {
                let result = Self::edit_secret(store, editor, &name).await;
                Self::report(&result, out, err)?;
                Ok(vec![result])
            }
            Command::Create { names } => {
                // one name at a time, in order; a failure does not stop the rest
                let mut results = Vec::with_capacity(names.len());
                for name in names {
                    let result = Self::create_secret(store, editor, &name).await;
                    Self::report(&result, out, err)?;
                    results.push(result);
                }
                Ok(results)
            }
            Command::List { filters } => Self::list_command(store, &filters, out, err).await,
            Command::View { names } => Self::view_secrets(store, &names, out, err).await,
            Command::Usage => {
                writeln!(out, "{}", constants::cli::USAGE)?;
                Ok(Vec::new())
            }
        }
    }

    /// Fetch, edit and write back an existing secret as a new version.
    ///
    /// A failed fetch or a failed editor aborts before anything is written.
    pub async fn edit_secret(
        store: &dyn SecretStore,
        editor: &dyn EditorLauncher,
        name: &str,
    ) -> OperationResult {
        let outcome = async {
            let current = store.get_secret_value(name).await?;
            let edited = edit::edit_value(editor, &current).await?;
            store.put_secret_value(name, &edited).await
        }
        .await;

        Self::into_result(name, outcome)
    }

    /// Create a secret from whatever the editor produces from `{}`.
    pub async fn create_secret(
        store: &dyn SecretStore,
        editor: &dyn EditorLauncher,
        name: &str,
    ) -> OperationResult {
        let outcome = async {
            validation::validate_secret_name(name)?;
            let value = edit::edit_value(editor, constants::editor::CREATE_PLACEHOLDER).await?;
            store.create_secret(name, &value).await
        }
        .await;

        Self::into_result(name, outcome)
    }

    /// Drain every page of the listing and return the names sorted.
    pub async fn list_secrets(store: &dyn SecretStore, filters: &[String]) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut next_token = None;

        loop {
            let page = store
                .list_secrets_page(filters, next_token)
                .await
                .context("Failed to list secrets")?;
            names.extend(page.names);
            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }

        names.sort();
        Ok(names)
    }

    async fn list_command(
        store: &dyn SecretStore,
        filters: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Vec<OperationResult>> {
        let label = if filters.is_empty() {
            "*".to_string()
        } else {
            filters.join(" ")
        };

        let result = match Self::list_secrets(store, filters).await {
            Ok(names) => {
                for name in &names {
                    writeln!(out, "{}", name)?;
                }
                OperationResult::new_success(label, None)
            }
            Err(e) => OperationResult::new_failure(label, format_error_chain(&e)),
        };

        if result.is_failure() {
            Self::report(&result, out, err)?;
        }
        Ok(vec![result])
    }

    /// Print each secret's value as indented JSON, or raw if it is not JSON.
    pub async fn view_secrets(
        store: &dyn SecretStore,
        names: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<Vec<OperationResult>> {
        let mut results = Vec::with_capacity(names.len());

        for name in names {
            let result = match store.get_secret_value(name).await {
                Ok(raw) => {
                    let (rendered, parse_error) = view::render_value(&raw);
                    if let Some(parse_error) = parse_error {
                        writeln!(
                            err,
                            "{} {}: value is not valid JSON ({}), printing it unformatted",
                            "warning:".yellow().bold(),
                            name,
                            parse_error
                        )?;
                    }
                    writeln!(out, "{}", rendered)?;
                    OperationResult::new_success(name.clone(), None)
                }
                Err(e) => {
                    let result = OperationResult::new_failure(name.clone(), format_error_chain(&e));
                    Self::report(&result, out, err)?;
                    result
                }
            };
            results.push(result);
        }

        Ok(results)
    }

    /// Count successful and failed results.
    ///
    /// # Returns
    ///
    /// Returns a tuple of (success_count, failure_count).
    pub fn count_results(results: &[OperationResult]) -> (usize, usize) {
        let success = results.iter().filter(|r| r.is_success()).count();
        (success, results.len() - success)
    }

    /// Whether the process should exit successfully for these results.
    pub fn all_succeeded(results: &[OperationResult]) -> bool {
        let (success, failure) = Self::count_results(results);
        info!(success, failure, "finished");
        failure == 0
    }

    fn into_result(name: &str, outcome: Result<String>) -> OperationResult {
        match outcome {
            Ok(identifier) => OperationResult::new_success(name.to_string(), Some(identifier)),
            Err(e) => OperationResult::new_failure(name.to_string(), format_error_chain(&e)),
        }
    }

    fn report(result: &OperationResult, out: &mut dyn Write, err: &mut dyn Write) -> io::Result<()> {
        match (&result.identifier, &result.error) {
            (_, Some(error)) => writeln!(
                err,
                "{} {}: {}",
                "error:".red().bold(),
                result.secret_name,
                error
            ),
            (Some(identifier), None) => writeln!(out, "{}", identifier),
            (None, None) => Ok(()),
        }
    }
}
