use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Arg, Command};
use log::{error, info};

use pins2c::{Config, Prefix};

fn run() -> Result<()> {
    let matches = Command::new("pins2c")
        .about("Generate C GPIO init files from a pinout CSV table")
        .arg(
            Arg::new("input")
                .help("Input pinout CSV file")
                .required(true)
                .value_name("FILE"),
        )
        .arg(
            Arg::new("prefix")
                .help("Short project-name prefix for generated symbols, e.g. `zebra`")
                .required(true)
                .value_name("PREFIX"),
        )
        .arg(
            Arg::new("output_dir")
                .long("output-dir")
                .short('o')
                .help("Directory to place the generated files in")
                .value_name("DIR"),
        )
        .arg(
            Arg::new("log_level")
                .long("log")
                .short('l')
                .help(format!(
                    "Choose which messages to log (overrides {})",
                    env_logger::DEFAULT_FILTER_ENV
                ))
                .value_parser(["off", "error", "warn", "info", "debug", "trace"]),
        )
        .version(env!("CARGO_PKG_VERSION"))
        .get_matches();

    setup_logging(&matches);

    // Prefix problems must surface before any file is opened or truncated.
    let prefix = Prefix::new(matches.get_one::<String>("prefix").unwrap())?;
    let config = Config {
        input: PathBuf::from(matches.get_one::<String>("input").unwrap()),
        prefix,
        output_dir: matches.get_one::<String>("output_dir").map(PathBuf::from),
    };

    let csv_text = fs::read_to_string(&config.input)
        .with_context(|| format!("couldn't read the input CSV file {}", config.input.display()))?;
    info!("opened input CSV file: {}", config.input.display());

    // Both outputs are created (truncating) before parsing starts. A failed
    // run leaves partial files behind; a nonzero exit means discard them.
    let source_path = config.source_path();
    let mut source = BufWriter::new(File::create(&source_path).with_context(|| {
        format!("couldn't open the C output file {}", source_path.display())
    })?);
    let header_path = config.header_path();
    let mut header = BufWriter::new(File::create(&header_path).with_context(|| {
        format!("couldn't open the H output file {}", header_path.display())
    })?);

    let count = pins2c::generate(&csv_text, &config, &mut header, &mut source)?;

    header.flush()?;
    source.flush()?;
    info!(
        "wrote {} pin definitions to {} and {}",
        count,
        source_path.display(),
        header_path.display()
    );

    Ok(())
}

fn setup_logging(matches: &clap::ArgMatches) {
    // * Log at info by default.
    // * Allow users the option of setting complex logging filters using
    //   env_logger's `RUST_LOG` environment variable.
    // * Override both of those if the logging level is set via the `--log`
    //   command line argument.
    let env = env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "info");
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_timestamp(None);

    let log_lvl_from_env = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();

    if log_lvl_from_env {
        log::set_max_level(log::LevelFilter::Trace);
    } else {
        let level = match matches.get_one::<String>("log_level") {
            Some(lvl) => lvl.parse().unwrap(),
            None => log::LevelFilter::Info,
        };
        log::set_max_level(level);
        builder.filter_level(level);
    }

    builder.init();
}

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        for cause in e.chain().skip(1) {
            error!("caused by: {}", cause);
        }
        process::exit(1);
    }
}
