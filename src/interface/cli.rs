use crate::interface::config::GenerateConfig;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "aadl-propgen")]
#[command(version, about = "Generate Java enum sources from AADL property sets")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate Java enums for the enumeration property types of every
    /// property set found in the input
    Generate {
        /// Property set file, or directory scanned for .aadl files
        #[arg(short = 'i', long = "input", default_value = ".")]
        input_path: PathBuf,

        /// Root folder for generated sources (default: ./src-gen)
        #[arg(short = 'o', long = "output-path", default_value = "./src-gen")]
        output_path: PathBuf,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,

        /// Configuration file path
        #[arg(short = 'c', long = "config")]
        config_file: Option<PathBuf>,
    },
    /// Analyze property set files and report diagnostics without generating
    Check {
        /// Property set file, or directory scanned for .aadl files
        #[arg(short = 'i', long = "input", default_value = ".")]
        input_path: PathBuf,

        /// Verbose output
        #[arg(long, action = clap::ArgAction::SetTrue)]
        verbose: bool,
    },
}

impl From<&Commands> for GenerateConfig {
    fn from(cmd: &Commands) -> Self {
        match cmd {
            Commands::Generate {
                input_path,
                output_path,
                verbose,
                ..
            } => GenerateConfig {
                input_path: input_path.to_string_lossy().to_string(),
                output_path: output_path.to_string_lossy().to_string(),
                // absent flag must not override a config file's setting
                verbose: verbose.then_some(true),
            },
            Commands::Check {
                input_path, verbose, ..
            } => GenerateConfig {
                input_path: input_path.to_string_lossy().to_string(),
                verbose: verbose.then_some(true),
                ..Default::default()
            },
        }
    }
}
