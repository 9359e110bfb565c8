use clap::Parser;
use lazy_static::lazy_static;
use regex::Regex;
use std::io::{self, BufRead};
use std::net::Ipv4Addr;
use std::process::exit;
use std::str::FromStr;
use subnet_finder::{Ipv4Cidr, MinimalSubnetFinder, SubnetError};

/// Print the smallest CIDR block covering the given IPv4 addresses.
#[derive(Parser)]
#[command(version)]
struct Opts {
    /// Addresses in dotted-quad form; read from stdin when none are given
    addresses: Vec<String>,

    /// Extra separator between addresses on a stdin line
    #[arg(short, long)]
    sep: Option<String>,

    /// Also print the first and last address of the block
    #[arg(short, long)]
    range: bool,

    /// Log intermediate values
    #[arg(short, long)]
    verbose: bool,
}

lazy_static! {
    static ref SPLIT: Regex = Regex::new(r"[,\s]+").expect("Invalid Regex?");
}

fn parse_address(token: &str) -> Result<Ipv4Addr, SubnetError> {
    Ipv4Addr::from_str(token).map_err(|_| SubnetError::InvalidAddress(token.to_owned()))
}

fn tokens<'a>(line: &'a str, sep: Option<&'a str>) -> Vec<&'a str> {
    let parts: Vec<&str> = match sep {
        Some(s) if !s.is_empty() => line.split(s).collect(),
        _ => vec![line],
    };
    parts
        .into_iter()
        .flat_map(|p| SPLIT.split(p))
        .filter(|t| !t.is_empty())
        .collect()
}

fn read_addresses<R: BufRead>(
    reader: R,
    sep: Option<&str>,
) -> Result<Vec<Ipv4Addr>, SubnetError> {
    let mut addresses = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for token in tokens(&line, sep) {
            addresses.push(parse_address(token)?);
        }
    }
    Ok(addresses)
}

fn run<R: BufRead>(opts: &Opts, input: R) -> Result<Ipv4Cidr, SubnetError> {
    let addresses = if opts.addresses.is_empty() {
        read_addresses(input, opts.sep.as_deref())?
    } else {
        opts.addresses
            .iter()
            .flat_map(|a| tokens(a, None))
            .map(parse_address)
            .collect::<Result<Vec<_>, _>>()?
    };
    log::debug!("addresses: {:?}", addresses);
    MinimalSubnetFinder::new(addresses)?.find()
}

fn main() {
    let opts = Opts::parse();
    let level = if opts.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    let stdin = io::stdin();
    match run(&opts, stdin.lock()) {
        Ok(cidr) if opts.range => println!("{}\t{}\t{}", cidr, cidr.first_ip(), cidr.last_ip()),
        Ok(cidr) => println!("{}", cidr),
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}
