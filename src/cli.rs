use clap::{crate_authors, crate_description, crate_version, Arg, ArgMatches, Command};
use pretty_env_logger::env_logger::Builder;
use std::env;
use std::io::Write;
use std::path::PathBuf;
use std::process::exit;

use url2kindle::common::{parse_article_url, Result, SendRequest, Sender};
use url2kindle::pushtokindle::{self, PushToKindle};
use url2kindle::store::{ConfigStore, TerminalPrompt};

/// `RUST_LOG` wins; otherwise warnings only, or debug when `U2K_DEBUG` is set.
fn set_logger_level(b: &mut Builder) {
    let mut b = b;
    if env::var("RUST_LOG").is_err() {
        b = b.filter_level(match env::var_os("U2K_DEBUG") {
            Some(_) => log::LevelFilter::Debug,
            None => log::LevelFilter::Warn,
        })
    }
    b.init();
}

fn setup_logger() {
    // Adapted from env_logger examples. <3 Systemd support
    match std::env::var("RUST_LOG_STYLE") {
        Ok(s) if s == "SYSTEMD" => {
            let builder = &mut pretty_env_logger::env_logger::builder();
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "<{}>{}: {}",
                    match record.level() {
                        log::Level::Error => 3,
                        log::Level::Warn => 4,
                        log::Level::Info => 6,
                        log::Level::Debug => 7,
                        log::Level::Trace => 7,
                    },
                    record.target(),
                    record.args()
                )
            });
            set_logger_level(builder);
        }
        _ => {
            let builder = &mut pretty_env_logger::formatted_builder();
            set_logger_level(builder);
        }
    };
}

fn article_url(value: &str) -> std::result::Result<url::Url, String> {
    parse_article_url(value).map_err(|err| err.to_string())
}

fn command() -> Command {
    Command::new("u2k")
        .about(format!(
            "{}\n{}",
            crate_description!(),
            "You will be asked for your Kindle address on first run.",
        ))
        .arg(
            Arg::new("url")
                .required(true)
                .value_parser(article_url)
                .help("URL of the article to send"),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Set a custom title for the article"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .env("U2K_CONFIG")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Configuration file to use instead of the default location"),
        )
        .arg(
            Arg::new("service-url")
                .long("service-url")
                .env("U2K_SERVICE_URL")
                .value_parser(url::Url::parse)
                .hide(true),
        )
        .version(crate_version!())
        .author(crate_authors!("\n"))
}

fn run(args: &ArgMatches) -> Result<()> {
    let store = match args.get_one::<PathBuf>("config") {
        Some(path) => ConfigStore::new(path),
        None => ConfigStore::at_default_location()?,
    };
    let config = store.load_or_create(&mut TerminalPrompt)?;

    let mut service = pushtokindle::Config::default();
    if let Some(service_url) = args.get_one::<url::Url>("service-url") {
        service.service_url = service_url.clone();
    }

    let url = args
        .get_one::<url::Url>("url")
        .expect("url is a required argument")
        .clone();
    let request = SendRequest::new(url, &config.kindle_email, &config.send_from)
        .with_title(args.get_one::<String>("title").cloned());

    PushToKindle::from(service).send(&request)?;

    println!("Sent {} to {}", request.url, request.kindle_email);
    Ok(())
}

pub(crate) fn main() {
    let args = command().get_matches();

    setup_logger();

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        exit(err.exit_code());
    }
}
