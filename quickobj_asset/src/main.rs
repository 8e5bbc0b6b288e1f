pub(crate) mod mesh;
pub(crate) mod utils;

use anyhow::Result;
use log::{debug, warn};
use mesh::obj;
use std::{fs, io, path::Path};
use structopt::StructOpt;
use walkdir::WalkDir;

// Cli arguments
#[derive(StructOpt, Debug)]
#[structopt(name = "quickobj_asset")]
struct CliArgs {
    /// Folder containing the `.obj` files to convert
    input: String,
    /// Output directory, mirrors the structure of the input folder
    #[structopt(short = "o", long = "output")]
    output: String,
    /// Output debug info
    #[structopt(short = "v", long = "verbose")]
    verbose: bool,
}

/// Happens during setup
#[derive(thiserror::Error, Debug)]
enum CliError {
    #[error("Input folder does not exist: {0}")]
    InputFolderNonExistant(String),
    #[error("Output folder structure could not be created: {0}")]
    ErrorCreatingOutputStructure(#[from] io::Error),
}

fn main() -> Result<()> {
    let args = CliArgs::from_args();

    if !args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    } else {
        env_logger::Builder::new()
            .filter(None, log::LevelFilter::Debug)
            .init();
    }

    prepare(args)
}

fn prepare(args: CliArgs) -> Result<()> {
    let output_path = Path::new(&args.output);

    let input_path = Path::new(&args.input);
    if !input_path.is_dir() {
        return Err(CliError::InputFolderNonExistant(input_path.display().to_string()).into());
    }

    for entry in WalkDir::new(input_path) {
        let path = match &entry {
            Err(err) => {
                warn!("Error parsing path: {}", err);
                continue;
            }
            Ok(entry) => entry.path(),
        };

        if path.is_dir() {
            continue;
        }

        let relative = match path.strip_prefix(input_path) {
            Ok(relative) => relative,
            Err(_) => {
                warn!("Skipping path outside the input folder: {}", path.display());
                continue;
            }
        };
        let output = output_path.join(relative);

        // creating the output folder of the input file in the same structure
        let local_output_folder = output.parent().unwrap_or(output_path);

        // check extension
        if let Some(Some(extension)) = path.extension().map(|x| x.to_str()) {
            match extension.to_ascii_lowercase().as_ref() {
                "obj" => {
                    if !local_output_folder.exists() {
                        fs::create_dir_all(local_output_folder)
                            .map_err(CliError::ErrorCreatingOutputStructure)?;
                    }
                    obj::process(path, local_output_folder)?
                }
                "mtl" => debug!("Material library is loaded with its mesh: {}", &path.display()),
                "toml" => debug!("Ignored toml file: {}", &path.display()),
                _ => warn!("Could not handle path: {}", &path.display()),
            }
        } else {
            warn!(
                "Ignored file \"{}\", because no file extension was found.",
                path.display()
            );
        }
    }

    Ok(())
}
