//! Subnet predicates.

use crate::models::Subnet;

/// One narrowing criterion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubnetFilter {
    /// First `Name` tag equals the value exactly.
    ByName(String),
    /// Some tag has this key, any value.
    ByTagKey(String),
    /// Availability zone is one of these.
    ByZones(Vec<String>),
}

impl SubnetFilter {
    pub fn matches(&self, subnet: &Subnet) -> bool {
        match self {
            // Duplicate `Name` tags: the first one decides, see `Subnet::name`
            SubnetFilter::ByName(name) => subnet.name() == Some(name.as_str()),
            SubnetFilter::ByTagKey(key) => subnet.has_tag_key(key),
            SubnetFilter::ByZones(zones) => zones.iter().any(|z| *z == subnet.availability_zone),
        }
    }

    /// Short label for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            SubnetFilter::ByName(_) => "name",
            SubnetFilter::ByTagKey(_) => "tag-key",
            SubnetFilter::ByZones(_) => "zone",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subnet() -> Subnet {
        Subnet::new("s1", "us-east-1a")
            .with_tag("Name", "private-a")
            .with_tag("kubernetes.io/role/internal-elb", "1")
    }

    #[test]
    fn test_by_name() {
        assert!(SubnetFilter::ByName("private-a".into()).matches(&subnet()));
        assert!(!SubnetFilter::ByName("private".into()).matches(&subnet()));
        assert!(!SubnetFilter::ByName("".into()).matches(&subnet()));
    }

    #[test]
    fn test_by_name_duplicate_tags_first_governs() {
        let s = Subnet::new("s1", "us-east-1a")
            .with_tag("Name", "a")
            .with_tag("Name", "b");
        assert!(SubnetFilter::ByName("a".into()).matches(&s));
        assert!(!SubnetFilter::ByName("b".into()).matches(&s));
    }

    #[test]
    fn test_by_name_without_name_tag() {
        let s = Subnet::new("s1", "us-east-1a");
        assert!(!SubnetFilter::ByName("".into()).matches(&s));
    }

    #[test]
    fn test_by_tag_key() {
        let s = subnet();
        assert!(SubnetFilter::ByTagKey("kubernetes.io/role/internal-elb".into()).matches(&s));
        assert!(SubnetFilter::ByTagKey("Name".into()).matches(&s));
        assert!(!SubnetFilter::ByTagKey("name".into()).matches(&s));
    }

    #[test]
    fn test_by_zones() {
        let s = subnet();
        let zones = |z: &[&str]| SubnetFilter::ByZones(z.iter().map(|z| z.to_string()).collect());
        assert!(zones(&["us-east-1b", "us-east-1a"]).matches(&s));
        assert!(!zones(&["us-east-1b"]).matches(&s));
        assert!(!zones(&[]).matches(&s));
    }
}
