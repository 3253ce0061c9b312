//! Caller-supplied narrowing criteria.

/// Which subnets a caller is willing to accept.
///
/// `None` means "do not filter on this dimension", which is not the same as
/// `Some(String::new())`. An empty `zones` list applies no zone restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Exact value of the subnet's `Name` tag.
    pub name: Option<String>,
    /// Tag key the subnet must carry.
    pub tag_key: Option<String>,
    /// Acceptable availability zones.
    pub zones: Vec<String>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tag_key(mut self, tag_key: impl Into<String>) -> Self {
        self.tag_key = Some(tag_key.into());
        self
    }

    pub fn with_zones<I, S>(mut self, zones: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.zones.extend(zones.into_iter().map(Into::into));
        self
    }

    /// True when no dimension is constrained.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.tag_key.is_none() && self.zones.is_empty()
    }
}
