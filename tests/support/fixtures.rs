//! Test fixtures and constants.

/// Key id written by `Test::init`.
pub const TEST_KEY_ID: &str = "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab";

/// Default env file name inside the test directory.
pub const ENV_FILE: &str = "app.env";

/// Plaintext the mock KMS refuses to encrypt.
pub const MOCK_FAIL: &str = "mock-kms-fail";

/// Typical entries used across multiple tests.
pub const STANDARD_ENTRIES: &[&str] = &[
    "DATABASE_URL=postgres://app:pw@localhost/mydb",
    "API_KEY=sk-test-12345",
    "JWT_SECRET=super-secret-jwt-token",
];
