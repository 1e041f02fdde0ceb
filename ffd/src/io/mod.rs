use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{LevelFilter, info, warn};
use pallet_rs::io::ext_repr::ExtPLInstance;
use pallet_rs::io::{export, import_with_issues};
use serde::Serialize;

use crate::EPOCH;
use crate::config::FFDConfig;
use crate::io::cli::Cli;
use crate::io::output::PLOutput;
use crate::opt::ffd_optimizer::FFDOptimizer;

pub mod cli;
pub mod output;

/// Reads the instance and config passed on the command line, packs it and writes the solution.
/// Returns the path of the solution file.
pub fn main_ffd(args: &Cli) -> Result<PathBuf> {
    let config = match &args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFDConfig::default()
        }
        Some(config_file) => read_config(config_file)?,
    };
    let config = args.apply_overrides(config);

    info!("Successfully parsed FFDConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid file name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = read_instance(args.input_file.as_path())?;
    let (instance, issues) = import_with_issues(&ext_instance)?;
    if !issues.is_empty() {
        warn!(
            "[MAIN] {} issue(s) found in {}, check the input data",
            issues.len(),
            ext_instance.name
        );
    }

    let solution = FFDOptimizer::new(instance.clone(), config).solve();

    let output = PLOutput {
        instance: ext_instance,
        solution: export(&instance, &solution, *EPOCH),
        config,
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));

    write_json(&output, &solution_path)?;
    Ok(solution_path)
}

pub fn read_instance(path: &Path) -> Result<ExtPLInstance> {
    let file = File::open(path)
        .with_context(|| format!("could not open instance file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .with_context(|| format!("could not parse instance file: {}", path.display()))
}

pub fn read_config(path: &Path) -> Result<FFDConfig> {
    let file = File::open(path)
        .with_context(|| format!("could not open config file: {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).context("incorrect config file format")
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;

    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "Solution JSON written to file://{}",
        fs::canonicalize(path)?.to_str().unwrap_or("?")
    );
    Ok(())
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        // Add blanket level filter -
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("Epoch: {}", jiff::Timestamp::now());
    Ok(())
}
