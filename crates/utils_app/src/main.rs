mod config;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use utils_core::{count_occurrences, Console};
use utils_logging::{utils_debug, utils_warn};

use config::AppConfig;

const USAGE: &str = "usage: utils_app <pattern> [file] | utils_app --init";

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let Some(pattern) = args.next() else {
        bail!(USAGE);
    };

    let cwd = std::env::current_dir().context("current directory is not accessible")?;
    let config_path = config::resolve_path(&cwd);
    let (config, config_error) = match config::load(&config_path) {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    if pattern == "--init" {
        if let Some(err) = config_error {
            return Err(err).context(format!(
                "refusing to overwrite unreadable config {:?}",
                config_path
            ));
        }
        config::save(&config_path, &config)
            .with_context(|| format!("failed to write {:?}", config_path))?;
        println!("{}", config_path.display());
        return Ok(());
    }

    let input = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    if let Some(destination) = config.log_target.destination() {
        if !utils_logging::initialize(destination) {
            eprintln!("Warning: {destination:?} logging could not be set up; logging disabled");
        }
    }
    if let Some(err) = config_error {
        utils_warn!("{err}; using default settings");
    }
    utils_debug!("Loaded settings {:?} from {:?}", config, config_path);

    let text = read_input(input.as_ref())?;
    let count = count_occurrences(&text, &pattern, config.allow_overlapping);

    let console = Console::from_environment();
    console.log(&format_args!(
        "{count} occurrence(s) of {pattern:?} (overlapping: {})",
        config.allow_overlapping
    ));

    println!("{count}");
    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> anyhow::Result<String> {
    match path {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
