use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

use clap::{command, value_parser, Arg, ArgAction};
use reqwest::Client;
use tracing::{debug, error, info};
use twelf::Layer;

use es_bulk_bench::conf::{Config, Credentials};
use es_bulk_bench::es_client::EsClient;
use es_bulk_bench::models::bulk;

fn load_actions(path: &str) -> std::io::Result<Vec<String>> {
    let file = File::open(path)?;
    bulk::actions_from_reader(BufReader::new(file))
}

#[tokio::main]
async fn main() {
    let matches = command!() // requires `cargo` feature
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Sets a config file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .help("Input file with one JSON document per line")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("index")
                .long("index")
                .help("Target index name"),
        )
        .arg(
            Arg::new("debug")
                .short('d')
                .long("debug")
                .help("Enable debug mode")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let debug = matches
        .get_one::<bool>("debug")
        .unwrap_or(&false)
        .to_owned();

    let filter = if debug {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        match Config::with_layers(&[Layer::Toml(config_path.clone())]) {
            Ok(value) => value,
            Err(err) => {
                error!("Failed to load config file {:?}: {}", config_path, err);
                process::exit(1);
            }
        }
    } else {
        Config::default()
    };
    if let Some(input) = matches.get_one::<PathBuf>("input") {
        config.set_input_file(input.display().to_string());
    }
    if let Some(index) = matches.get_one::<String>("index") {
        config.set_index(index.clone());
    }

    let credentials = match Credentials::from_env() {
        Ok(value) => value,
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    };

    info!(
        "host={}, index={}, input={}",
        credentials.get_host(),
        config.get_index(),
        config.get_input_file()
    );

    let actions = match load_actions(config.get_input_file()) {
        Ok(value) => value,
        Err(err) => {
            error!(
                "Error when opening file {}: {}",
                config.get_input_file(),
                err
            );
            process::exit(1);
        }
    };
    debug!("loaded {} documents", actions.len() / 2);

    let es_client = EsClient::new(
        credentials.get_base_url(),
        credentials.get_api_key().clone(),
        Client::new(),
    );

    println!("Sending gzipped bulk request");
    let start = Instant::now();
    if let Err(err) = es_client.send_bulk(config.get_index(), &actions, true).await {
        error!("{}", err);
        process::exit(1);
    }
    println!("Took {:?}\n", start.elapsed());

    println!("Sending regular bulk request");
    let start = Instant::now();
    if let Err(err) = es_client.send_bulk(config.get_index(), &actions, false).await {
        error!("{}", err);
        process::exit(1);
    }
    println!("Took {:?}", start.elapsed());
}
