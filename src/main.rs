use clap::Parser;
use futures::future::join_all;
use std::error::Error;
use subnet_resolver::inventory::{AwsCliFetcher, DEFAULT_COMMAND};
use subnet_resolver::output::print_subnets;
use subnet_resolver::{Constraints, ResolverConfig, SubnetResolver};
use tokio_util::sync::CancellationToken;

/// Resolve the subnets eligible for new nodes of one or more clusters.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Cluster name, repeat for several clusters
    #[arg(short, long = "cluster", required = true)]
    clusters: Vec<String>,

    /// Only subnets whose Name tag equals this
    #[arg(long)]
    name: Option<String>,

    /// Only subnets carrying this tag key
    #[arg(long)]
    tag_key: Option<String>,

    /// Only subnets in these availability zones
    #[arg(short, long = "zone")]
    zones: Vec<String>,

    /// Region passed to the inventory CLI
    #[arg(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Inventory command prefix
    #[arg(long, default_value = DEFAULT_COMMAND)]
    inventory_cmd: String,

    /// Resolve this many times, later rounds are served from cache
    #[arg(long, default_value_t = 1)]
    repeat: u32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default())?;
    dotenv::dotenv().ok();
    let args = Args::parse();
    log::info!("#Start main() clusters={:?}", args.clusters);

    let fetcher = AwsCliFetcher::new(args.inventory_cmd.clone()).with_region(args.region.clone());
    let resolver = SubnetResolver::new(fetcher, ResolverConfig::from_env());
    let constraints = Constraints {
        name: args.name.clone(),
        tag_key: args.tag_key.clone(),
        zones: args.zones.clone(),
    };

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::warn!("Interrupted, cancelling discovery");
            ctrl_c.cancel();
        }
    });

    let mut results = Vec::new();
    for round in 1..=args.repeat.max(1) {
        let resolved = join_all(
            args.clusters
                .iter()
                .map(|cluster| resolver.get(&cancel, cluster, &constraints)),
        )
        .await;

        results.clear();
        for (cluster, result) in args.clusters.iter().zip(resolved) {
            results.push((cluster.clone(), result?));
        }
        log::info!("round {round}: cache {:?}", resolver.cache_stats());
    }

    print_subnets(&results);
    Ok(())
}
