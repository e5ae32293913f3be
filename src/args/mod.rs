use clap::Parser;
use log::warn;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, String> {
    let xx = Args::parse();
    xx.validate()?;
    Ok(CleanArgs::new(xx))
}

impl Args {
    /// # Errors
    ///
    /// Will return `Err` if the static directory is set but unusable or no
    /// position file exists at all.
    pub fn validate(&self) -> Result<(), String> {
        if self.static_dir.exists() && !self.static_dir.is_dir() {
            return Err(format!(
                "The static path '{}' is not a directory.",
                self.static_dir.display()
            ));
        }
        let missing = validation::missing_source_files(&self.data_dir);
        if missing.len() == crate::model::Position::ALL.len() {
            return Err(format!(
                "No position files found in '{}'.",
                self.data_dir.display()
            ));
        }
        for path in &missing {
            warn!("{} not found, its panel will be unavailable", path.display());
        }
        Ok(())
    }
}

impl CleanArgs {
    #[must_use]
    pub fn new(args: Args) -> Self {
        CleanArgs {
            data_dir: args.data_dir,
            bind_addr: (args.host, args.port),
            static_dir: args.static_dir,
        }
    }
}
