use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use bfs::config::BFSConfig;
use bfs::io::cli::Cli;
use bfs::io::output::BFSOutput;
use bfs::io::table::read_table_instance;
use bfs::io::{self, read_json_instance};
use bfs::opt::bfs::BFSOptimizer;
use bfs::EPOCH;
use clap::Parser as ClapParser;
use log::{info, warn};
use varpack::io::ext_repr::ExtVPInstance;

fn main() -> Result<()> {
    LazyLock::force(&EPOCH);
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BFSConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed BFSConfig: {config:?}");

    let (ext_instance, input_path) = match (&args.input_file, &args.table_prefix) {
        (Some(input_file), _) => (read_json_instance(input_file)?, input_file),
        (None, Some(prefix)) => {
            info!("[MAIN] reading tables with prefix {}", prefix.display());
            (read_table_instance(prefix)?, prefix)
        }
        (None, None) => unreachable!("clap requires one of the inputs"),
    };

    let input_stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input path has no valid file name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    main_bfs(ext_instance, config, &input_stem, &args.solution_folder)
}

fn main_bfs(
    ext_instance: ExtVPInstance,
    config: BFSConfig,
    input_stem: &str,
    output_folder: &Path,
) -> Result<()> {
    let instance = varpack::io::import(&ext_instance)?;
    info!(
        "[MAIN] imported instance {}: {} items, {} bins, {} allowed allocations",
        ext_instance.name,
        instance.n_items(),
        instance.n_bins(),
        instance.constraint().n_allowed()
    );

    let mut optimizer = BFSOptimizer::new(instance, config)?;
    let sol = optimizer.solve()?;

    let output = BFSOutput {
        solution: varpack::io::export(&optimizer.instance, &sol, *EPOCH),
        instance: ext_instance,
        config,
    };

    let solution_path = output_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    Ok(())
}
