//! AWS SDK client setup.

use aws_sdk_dynamodb::Client;

/// Store connection configuration, read from the environment.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Custom endpoint URL (for local DynamoDB).
    pub endpoint_url: Option<String>,
    /// AWS region.
    pub region: String,
    /// Table holding the catalog items.
    pub table_name: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            endpoint_url: std::env::var("AWS_ENDPOINT_URL").ok(),
            region: std::env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
            table_name: std::env::var("DYNAMODB_TABLE_NAME")
                .unwrap_or_else(|_| "products".to_string()),
        }
    }
}

impl StoreConfig {
    /// Returns a display string for the target environment.
    pub fn target_display(&self) -> String {
        match &self.endpoint_url {
            Some(url) => format!("Local DynamoDB ({})", url),
            None => format!("AWS DynamoDB (region: {})", self.region),
        }
    }
}

/// Creates a DynamoDB client with the given configuration.
///
/// Credentials come from the SDK's default chain; this layer never sees
/// them.
pub async fn create_client(config: &StoreConfig) -> Client {
    let mut sdk_config_loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.region.clone()));

    if let Some(endpoint) = &config.endpoint_url {
        sdk_config_loader = sdk_config_loader.endpoint_url(endpoint);
    }

    let sdk_config = sdk_config_loader.load().await;
    Client::new(&sdk_config)
}
