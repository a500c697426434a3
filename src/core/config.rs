//! Gateway configuration.
//!
//! Everything the KMS client needs is passed in explicitly; nothing is read
//! from or written to process-global state after argument parsing.

/// Connection settings for the key-management gateway.
///
/// Unset fields fall back to the SDK's default provider chains
/// (environment, shared config files, instance metadata).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KmsConfig {
    /// Named profile from the shared credentials/config files
    pub profile: Option<String>,
    /// Region override, e.g. `eu-west-1`
    pub region: Option<String>,
    /// Endpoint override for KMS-compatible services (e.g. localstack)
    pub endpoint_url: Option<String>,
}

impl KmsConfig {
    /// Build a config, treating blank values as unset.
    pub fn new(
        profile: Option<String>,
        region: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        Self {
            profile: non_blank(profile),
            region: non_blank(region),
            endpoint_url: non_blank(endpoint_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
