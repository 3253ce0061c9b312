//! Cloud subnet data model.

use serde::{Deserialize, Serialize};

/// Tag key holding a subnet's display name.
pub const NAME_TAG_KEY: &str = "Name";

/// A key/value tag attached to a subnet.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    pub key: String,
    #[serde(default)]
    pub value: String,
}

impl Tag {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Tag {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Represents a subnet discovered for a cluster.
///
/// Field names follow the inventory JSON (`SubnetId`, `AvailabilityZone`, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub struct Subnet {
    /// Provider identifier, e.g. `subnet-0abc`.
    pub subnet_id: String,
    /// Availability zone the subnet lives in.
    pub availability_zone: String,
    /// Tags in the order the inventory returned them.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Parent virtual network.
    #[serde(default)]
    pub vpc_id: Option<String>,
    /// IPv4 CIDR block.
    #[serde(default)]
    pub cidr_block: Option<String>,
    /// Free addresses left in the subnet.
    #[serde(default)]
    pub available_ip_address_count: Option<u32>,
}

impl Subnet {
    pub fn new(subnet_id: impl Into<String>, availability_zone: impl Into<String>) -> Self {
        Subnet {
            subnet_id: subnet_id.into(),
            availability_zone: availability_zone.into(),
            ..Default::default()
        }
    }

    /// Builder style helper to append a tag.
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.push(Tag::new(key, value));
        self
    }

    /// Value of the first `Name` tag.
    ///
    /// Subnets conventionally carry a single `Name` tag. If several are present
    /// the first one in tag order wins and the rest are ignored.
    pub fn name(&self) -> Option<&str> {
        self.tags
            .iter()
            .find(|tag| tag.key == NAME_TAG_KEY)
            .map(|tag| tag.value.as_str())
    }

    /// True if any tag uses `key`, whatever its value.
    pub fn has_tag_key(&self, key: &str) -> bool {
        self.tags.iter().any(|tag| tag.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_first_tag_wins() {
        let subnet = Subnet::new("s1", "us-east-1a")
            .with_tag("env", "prod")
            .with_tag("Name", "first")
            .with_tag("Name", "second");
        assert_eq!(subnet.name(), Some("first"));
    }

    #[test]
    fn test_name_missing() {
        let subnet = Subnet::new("s1", "us-east-1a").with_tag("env", "prod");
        assert_eq!(subnet.name(), None);
    }

    #[test]
    fn test_has_tag_key_ignores_value() {
        let subnet = Subnet::new("s1", "us-east-1a").with_tag("kubernetes.io/role/elb", "");
        assert!(subnet.has_tag_key("kubernetes.io/role/elb"));
        assert!(!subnet.has_tag_key("kubernetes.io/role"));
    }

    #[test]
    fn test_deserialize_inventory_fields() {
        let json = r#"{
            "SubnetId": "subnet-01",
            "AvailabilityZone": "us-west-2b",
            "VpcId": "vpc-9",
            "CidrBlock": "10.0.1.0/24",
            "AvailableIpAddressCount": 250,
            "Tags": [{"Key": "Name", "Value": "private-b"}]
        }"#;
        let subnet: Subnet = serde_json::from_str(json).expect("Error parsing subnet");
        assert_eq!(subnet.subnet_id, "subnet-01");
        assert_eq!(subnet.availability_zone, "us-west-2b");
        assert_eq!(subnet.vpc_id.as_deref(), Some("vpc-9"));
        assert_eq!(subnet.available_ip_address_count, Some(250));
        assert_eq!(subnet.name(), Some("private-b"));
    }

    #[test]
    fn test_deserialize_without_tags() {
        let json = r#"{"SubnetId": "subnet-02", "AvailabilityZone": "us-west-2a"}"#;
        let subnet: Subnet = serde_json::from_str(json).expect("Error parsing subnet");
        assert!(subnet.tags.is_empty());
        assert_eq!(subnet.cidr_block, None);
    }
}
