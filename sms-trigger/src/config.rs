pub const DEFAULT_REGION: &str = "us-east-1";
pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

/// Process-wide settings, read once at startup.
///
/// `auth_token` and `topic_arn` are kept optional: a deployment missing
/// either still starts and answers every request with a 500 naming the
/// missing variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub auth_token: Option<String>,
    pub topic_arn: Option<String>,
    pub region: String,
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Config {
            auth_token: non_empty("AUTH_TOKEN"),
            topic_arn: non_empty("SNS_TOPIC_ARN"),
            region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            bind_address: non_empty("BIND_ADDRESS")
                .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string()),
        }
    }
}
