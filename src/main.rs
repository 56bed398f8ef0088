#[macro_use]
extern crate tracing;

use std::path::PathBuf;

use structopt::StructOpt;
use tokio::runtime::Builder;
use validator::Validate;

use qlockweb::{
    api::{AlwaysConfirm, Confirm, FormData, TerminalConfirm},
    config::Config,
    device::Device,
    format::format_uptime,
    models::{DeviceStatus, UpdateCheck},
};

#[derive(Debug, StructOpt)]
#[structopt(name = "qlockctl", about = "Query and control a QlockThree clock")]
struct Opts {
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u32,
    #[structopt(short, long = "config")]
    config_path: Option<PathBuf>,
    /// Base URL of the clock, overrides the configuration file
    #[structopt(short, long)]
    url: Option<String>,
    /// Do not ask before updating or resetting the clock
    #[structopt(short, long)]
    yes: bool,
    #[structopt(subcommand)]
    command: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Show the clock status
    Status,
    /// Ask the clock whether a firmware update is available
    CheckUpdate,
    /// Install the available firmware update
    Update,
    /// Clear the WiFi settings of the clock
    WifiReset,
    /// GET a path and print the response
    Get {
        path: String,
        /// Decode and pretty-print the response as JSON
        #[structopt(long)]
        json: bool,
    },
    /// POST form fields to a path and print the response
    Post {
        path: String,
        /// Fields as key=value
        #[structopt(parse(try_from_str = parse_field))]
        fields: Vec<(String, String)>,
        /// Send this body verbatim instead of encoding fields
        #[structopt(long, conflicts_with = "fields")]
        raw: Option<String>,
    },
    /// Print the effective configuration
    DumpConfig,
}

fn parse_field(s: &str) -> Result<(String, String), String> {
    let pos = s
        .find('=')
        .ok_or_else(|| format!("invalid key=value: no `=` found in `{}`", s))?;
    Ok((s[..pos].to_owned(), s[pos + 1..].to_owned()))
}

fn print_status(status: &DeviceStatus) {
    println!("{:<17}{}", "Hostname:", status.hostname);
    println!("{:<17}{}", "IP Address:", status.ip);
    println!("{:<17}{}", "WiFi Network:", status.ssid);
    println!("{:<17}{} dBm", "WiFi RSSI:", status.rssi);
    println!("{:<17}{}", "Uptime:", format_uptime(status.uptime));
    println!("{:<17}{} bytes", "Free Heap:", status.free_heap);
    println!("{:<17}{}", "Chip Model:", status.chip_model);
    println!("{:<17}{}", "SDK Version:", status.sdk_version);
    print_update_check(&status.update_check());
}

fn print_update_check(check: &UpdateCheck) {
    println!("{:<17}{}", "Current Version:", check.current_version);
    println!(
        "{:<17}{}",
        "Latest Version:",
        if check.latest_version.is_empty() {
            "unknown"
        } else {
            check.latest_version.as_str()
        }
    );

    if check.update_available {
        println!("Update available!");
    } else {
        println!("Up to date");
    }
}

fn print_reply(reply: Option<String>) {
    match reply {
        Some(reply) => println!("{}", reply),
        None => println!("Cancelled"),
    }
}

async fn run(opts: Opts) -> color_eyre::eyre::Result<()> {
    // Load configuration
    let mut config = Config::load(opts.config_path.as_deref()).await?;
    if let Some(url) = opts.url {
        config.base_url = url;
    }
    config.validate()?;
    debug!(base_url = %config.base_url, "using device");

    let device = Device::new(&config.base_url);
    let confirm: &dyn Confirm = if opts.yes {
        &AlwaysConfirm
    } else {
        &TerminalConfirm
    };

    match opts.command {
        Command::Status => print_status(&device.status().await?),
        Command::CheckUpdate => print_update_check(&device.check_update().await?),
        Command::Update => print_reply(device.install_update(confirm).await?),
        Command::WifiReset => print_reply(device.reset_wifi(confirm).await?),
        Command::Get { path, json } => {
            let url = device.url(&path);

            if json {
                let value = device.client().get_json(&url).await?;
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", device.client().get_text(&url).await?);
            }
        }
        Command::Post { path, fields, raw } => {
            let data = match raw {
                Some(raw) => FormData::Raw(raw),
                None => FormData::Fields(fields.into_iter().collect()),
            };

            println!("{}", device.client().post_form(&device.url(&path), data).await?);
        }
        Command::DumpConfig => print!("{}", config.to_string()?),
    }

    Ok(())
}

fn install_tracing(opts: &Opts) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_error::ErrorLayer;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_env("QLOCK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match opts.verbose {
            0 => "qlockweb=warn,qlockctl=warn",
            1 => "qlockweb=info,qlockctl=info",
            2 => "qlockweb=debug,qlockctl=debug",
            _ => "qlockweb=trace,qlockctl=trace",
        })
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .try_init()
}

#[paw::main]
fn main(opts: Opts) -> color_eyre::eyre::Result<()> {
    color_eyre::install()?;
    install_tracing(&opts)?;

    let rt = Builder::new_current_thread().enable_all().build()?;
    rt.block_on(run(opts))
}
