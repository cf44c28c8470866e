use smed::validation::validate_secret_name;

#[test]
fn test_validate_secret_name_empty_string() {
    let result = validate_secret_name("");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("empty"));
}

#[test]
fn test_validate_secret_name_exact_max_length() {
    assert!(validate_secret_name(&"n".repeat(512)).is_ok());
}

#[test]
fn test_validate_secret_name_over_max_length() {
    let result = validate_secret_name(&"n".repeat(513));
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("513"));
}

#[test]
fn test_validate_secret_name_path_style() {
    assert!(validate_secret_name("prod/payments/stripe-key").is_ok());
}

#[test]
fn test_validate_secret_name_arn_is_rejected() {
    // an ARN identifies an existing secret; it is never a valid new name
    let result = validate_secret_name("arn:aws:secretsmanager:us-east-1:000000000000:secret:db");
    assert!(result.is_err());
}

#[test]
fn test_validate_secret_name_unicode_characters() {
    let result = validate_secret_name("secret_日本語");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("letters"));
}

#[test]
fn test_validate_secret_name_with_whitespace() {
    assert!(validate_secret_name(" db").is_err());
    assert!(validate_secret_name("db\n").is_err());
}
