//! Subnet discovery through `aws ec2 describe-subnets`.

use super::cli;
use super::InventoryFetcher;
use crate::error::InventoryError;
use crate::models::Subnet;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default command prefix; the filter and output flags are appended.
pub const DEFAULT_COMMAND: &str = "aws ec2 describe-subnets";

/// Response body of `describe-subnets --output json`.
///
/// The CLI follows `NextToken` itself, so one response holds every page.
#[derive(Serialize, Deserialize, Debug, Default)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeSubnetsOutput {
    #[serde(default)]
    pub subnets: Vec<Subnet>,
    #[serde(default)]
    pub next_token: Option<String>,
}

/// Parse CLI output, reporting the JSON path of any mismatch.
pub fn parse_describe_subnets(output: &str) -> Result<DescribeSubnetsOutput, InventoryError> {
    let mut deserializer = serde_json::Deserializer::from_str(output);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        log::error!("OUTPUT START:\n\n{output}\n\nOUTPUT END\n");
        InventoryError::Parse {
            path: e.path().to_string(),
            source: e.into_inner(),
        }
    })
}

/// [`InventoryFetcher`] backed by the AWS CLI.
#[derive(Debug, Clone)]
pub struct AwsCliFetcher {
    command: String,
    region: Option<String>,
}

impl Default for AwsCliFetcher {
    fn default() -> Self {
        AwsCliFetcher::new(DEFAULT_COMMAND)
    }
}

impl AwsCliFetcher {
    /// `command` may carry extra global flags, e.g. `aws --profile ops ec2 describe-subnets`.
    pub fn new(command: impl Into<String>) -> Self {
        AwsCliFetcher {
            command: command.into(),
            region: None,
        }
    }

    pub fn with_region(mut self, region: Option<String>) -> Self {
        self.region = region;
        self
    }

    /// Filter is passed as JSON so commas in a cluster name stay part of one value.
    fn args(&self, discovery_filter: &str) -> Vec<String> {
        let filters = serde_json::json!([{ "Name": "tag-key", "Values": [discovery_filter] }]);
        let mut args = vec![
            "--filters".to_string(),
            filters.to_string(),
            "--output".to_string(),
            "json".to_string(),
        ];
        if let Some(region) = &self.region {
            args.push("--region".to_string());
            args.push(region.clone());
        }
        args
    }
}

#[async_trait]
impl InventoryFetcher for AwsCliFetcher {
    async fn fetch(&self, discovery_filter: &str) -> Result<Vec<Subnet>, InventoryError> {
        let output = cli::run(&self.command, &self.args(discovery_filter)).await?;
        let parsed = parse_describe_subnets(&output)?;
        if let Some(token) = parsed.next_token {
            log::warn!("describe-subnets returned NextToken '{token}', result may be truncated");
        }
        Ok(parsed.subnets)
    }
}
