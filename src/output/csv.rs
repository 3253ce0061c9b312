//! CSV output of resolved subnets.

use super::terminal::{banner, format_field};
use crate::models::{Subnet, NAME_TAG_KEY};
use chrono::{SecondsFormat, Utc};
use itertools::Itertools;

pub const CSV_HEADER: &str = r#"         "cluster",               "subnet_id",        "zone",         "cidr",     "free",                   "name",                   "vpc_id", "tags""#;

/// One CSV row; tags other than `Name` are joined as `key=value;...`.
pub fn format_subnet_row(cluster: &str, subnet: &Subnet) -> String {
    let tags = subnet
        .tags
        .iter()
        .filter(|tag| tag.key != NAME_TAG_KEY)
        .map(|tag| format!("{}={}", tag.key, tag.value))
        .join(";");
    format!(
        "{cluster},{subnet_id},{zone},{cidr},{free},{name},{vpc_id},{tags}",
        cluster = format_field(cluster, 18),
        subnet_id = format_field(&subnet.subnet_id, 26),
        zone = format_field(&subnet.availability_zone, 13),
        cidr = format_field(subnet.cidr_block.as_deref().unwrap_or(""), 15),
        free = format_field(
            subnet
                .available_ip_address_count
                .map(|n| n.to_string())
                .unwrap_or_default(),
            9
        ),
        name = format_field(subnet.name().unwrap_or(""), 25),
        vpc_id = format_field(subnet.vpc_id.as_deref().unwrap_or(""), 25),
        tags = format_field(tags, 0),
    )
}

/// Print the resolved subnets of each cluster to stdout.
pub fn print_subnets(results: &[(String, Vec<Subnet>)]) {
    println!(
        "{}",
        banner(
            "RESOLVED",
            &Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        )
    );
    println!("{CSV_HEADER}");
    for (cluster, subnets) in results {
        for subnet in subnets {
            println!("{}", format_subnet_row(cluster, subnet));
        }
    }
}
