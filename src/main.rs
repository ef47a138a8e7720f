use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Result};
use log::info;

use edge2pdf::api::cli::{Cli, CliProgram};
use edge2pdf::config::Config;
use edge2pdf::converter::ConvertOptions;
use edge2pdf::library::chromium_library::{default_bookmarks_path, ChromiumLibrary};
use edge2pdf::library::Library;
use edge2pdf::{locator, pipeline};

fn main() -> Result<()> {
    let cli = Cli {};
    let program = cli.run();

    setup_logging(program.verbose);

    let config = Config::new_from_file(program.config.clone())?;
    let bookmarks_file = resolve_bookmarks_file(&program, &config)?;

    if program.list_folders {
        command_list_folders(&bookmarks_file)
    } else {
        let folder = program
            .folder
            .clone()
            .ok_or_else(|| anyhow!("--folder is required"))?;

        command_convert(&program, &config, &bookmarks_file, &folder)
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();
}

// CLI flag beats the config file, which beats the platform default.
fn resolve_bookmarks_file(program: &CliProgram, config: &Config) -> Result<PathBuf> {
    if let Some(path) = &program.bookmarks_file {
        return Ok(PathBuf::from(path));
    }

    if let Some(path) = config.bookmarks_file()? {
        return Ok(path);
    }

    Ok(default_bookmarks_path()?)
}

fn command_convert(
    program: &CliProgram,
    config: &Config,
    bookmarks_file: &Path,
    folder: &str,
) -> Result<()> {
    let options = ConvertOptions {
        headless: !program.no_headless && config.headless(),
        timeout: program
            .timeout
            .map(Duration::from_secs)
            .unwrap_or_else(|| config.timeout()),
        page_load_delay: config.page_load_delay(),
    };

    info!("Parsing bookmark folder: {}", folder);
    let entries = pipeline::parse_folder(bookmarks_file, folder)?;
    info!("Found {} bookmarks in folder \"{}\"", entries.len(), folder);

    let output = PathBuf::from(&program.output);
    let report = pipeline::convert_and_merge(&entries, &output, &options)?;

    info!(
        "Successfully created: {} ({} converted, {} failed)",
        output.display(),
        report.converted_count(),
        report.failed_count()
    );

    Ok(())
}

fn command_list_folders(bookmarks_file: &Path) -> Result<()> {
    let library: Box<dyn Library> = Box::new(ChromiumLibrary {});
    let tree = library.get_tree(bookmarks_file)?;

    println!("Available bookmark folders:");
    for folder in locator::list_folders(&tree) {
        println!("  {}", folder);
    }

    Ok(())
}
