use clap::Parser;
use colored::Colorize;
use ipv4_subnet_calc::output::{failure_json, render_report, report_json};
use ipv4_subnet_calc::{resolve_network_with, ListingPolicy};
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use std::error::Error;

/// Compute IPv4 subnet, host range and sibling subnets for an address.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// IPv4 address, optionally with a CIDR prefix (e.g. 192.168.1.10/26)
    address: String,

    /// Subnet mask in dotted-quad form; ignored when ADDRESS has a prefix
    #[arg(short, long)]
    mask: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Maximum number of sibling subnets to list
    #[arg(long)]
    max_listed: Option<usize>,

    /// Longest prefix that still gets a sibling listing
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=32))]
    max_listing_prefix: Option<u8>,
}

fn init_logging() -> Result<(), Box<dyn Error>> {
    if log4rs::init_file("log4rs.yml", Default::default()).is_ok() {
        return Ok(());
    }
    let stderr = ConsoleAppender::builder().target(Target::Stderr).build();
    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(
            Root::builder()
                .appender("stderr")
                .build(log::LevelFilter::Warn),
        )?;
    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    init_logging()?;
    dotenv::dotenv().ok();
    let args = Args::parse();
    log::info!("#Start main() {:?}", args);

    if args.no_color {
        colored::control::set_override(false);
    }

    let mut policy = ListingPolicy::from_env();
    if let Some(max_listed) = args.max_listed {
        policy.max_listed = max_listed;
    }
    if let Some(len) = args.max_listing_prefix {
        policy.max_listing_prefix = len;
    }

    match resolve_network_with(&policy, &args.address, args.mask.as_deref()) {
        Ok(report) if args.json => println!("{}", report_json(&report)?),
        Ok(report) => print!("{}", render_report(&report)),
        Err(failure) => {
            log::warn!("rejected input {:?}: {}", args.address, failure);
            if args.json {
                println!("{}", failure_json(&failure)?);
            } else {
                eprintln!("{} {}", "Error:".on_red(), failure);
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
