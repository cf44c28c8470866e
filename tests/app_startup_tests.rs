use clap::Parser;
use serial_test::serial;
use std::env;
use std::ffi::OsString;

use smed::app::App;
use smed::cli::Cli;
use smed::error::format_error_chain;

const AWS_VARS: &[&str] = &[
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_PROFILE",
    "AWS_CONFIG_FILE",
    "AWS_SHARED_CREDENTIALS_FILE",
    "AWS_EC2_METADATA_DISABLED",
];

fn save_aws_env() -> Vec<(&'static str, Option<OsString>)> {
    AWS_VARS.iter().map(|k| (*k, env::var_os(k))).collect()
}

fn restore_aws_env(saved: Vec<(&'static str, Option<OsString>)>) {
    for (key, value) in saved {
        match value {
            Some(v) => unsafe { env::set_var(key, v) },
            None => unsafe { env::remove_var(key) },
        }
    }
}

#[tokio::test]
#[serial]
async fn test_usage_does_not_need_aws() {
    let cli = Cli::try_parse_from(["smed", "a", "b"]).unwrap();
    let res = App::run(cli).await;
    assert!(matches!(res, Ok(true)));
}

#[tokio::test]
#[serial]
async fn test_run_fails_cleanly_without_region() {
    let saved = save_aws_env();
    let dir = tempfile::TempDir::new().unwrap();
    unsafe {
        env::remove_var("AWS_REGION");
        env::remove_var("AWS_DEFAULT_REGION");
        env::remove_var("AWS_PROFILE");
        env::set_var("AWS_CONFIG_FILE", dir.path().join("config"));
        env::set_var("AWS_SHARED_CREDENTIALS_FILE", dir.path().join("credentials"));
        env::set_var("AWS_EC2_METADATA_DISABLED", "true");
    }

    let cli = Cli::try_parse_from(["smed", "-l"]).unwrap();
    let res = App::run(cli).await;

    restore_aws_env(saved);

    let err = res.unwrap_err();
    let msg = format_error_chain(&err);
    assert!(msg.contains("Failed to set up AWS Secrets Manager client"));
    assert!(msg.contains("No AWS region configured"));
}
