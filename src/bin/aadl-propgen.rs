use aadl_propgen::interface::{analyze_inputs, generate_from_config, Cli, Commands};
use aadl_propgen::{GenerateConfig, Logger};
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Generate { config_file, .. } => run_generate(&cli.command, config_file.clone()),
        Commands::Check { .. } => run_check(&cli.command),
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    command: &Commands,
    config_file: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match config_file {
        Some(path) => GenerateConfig::from_file(path)?,
        None => GenerateConfig::default(),
    };
    config.merge(&GenerateConfig::from(command));

    let logger = Logger::new(config.is_verbose());
    let report = generate_from_config(&config)?;

    for set in &report.property_sets {
        logger.info(&format!(
            "{}: {} file{} -> {}",
            set.property_set,
            set.files.len(),
            if set.files.len() == 1 { "" } else { "s" },
            set.output_dir.display()
        ));
        for file in &set.files {
            logger.verbose(&format!("  {}", file));
        }
    }
    logger.info(&format!(
        "Generated {} Java type{} from {} property set{}",
        report.file_count(),
        if report.file_count() == 1 { "" } else { "s" },
        report.property_sets.len(),
        if report.property_sets.len() == 1 { "" } else { "s" },
    ));
    Ok(())
}

fn run_check(command: &Commands) -> Result<(), Box<dyn std::error::Error>> {
    let config = GenerateConfig::from(command);
    let logger = Logger::new(config.is_verbose());
    let analyses = analyze_inputs(&config)?;

    let mut error_count = 0;
    for analysis in &analyses {
        for diagnostic in &analysis.diagnostics {
            let line = format!("{}:{}", analysis.file.display(), diagnostic);
            if diagnostic.is_error() {
                error_count += 1;
                logger.error(&line);
            } else {
                logger.warning(&line);
            }
        }
        if let Some(set) = &analysis.property_set {
            logger.verbose(&format!(
                "{}: property set '{}' with {} type declaration{}",
                analysis.file.display(),
                set.name,
                set.types.len(),
                if set.types.len() == 1 { "" } else { "s" },
            ));
        }
    }

    if error_count > 0 {
        logger.info(&format!(
            "{} file{} checked, {} error{}",
            analyses.len(),
            if analyses.len() == 1 { "" } else { "s" },
            error_count,
            if error_count == 1 { "" } else { "s" },
        ));
        std::process::exit(1);
    }

    logger.info(&format!(
        "{} file{} checked, no errors",
        analyses.len(),
        if analyses.len() == 1 { "" } else { "s" },
    ));
    Ok(())
}
