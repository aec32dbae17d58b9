//! Report reference commands

use clap::Subcommand;
use safespeak_core::{error::Result, ReferenceFormat};

#[derive(Subcommand)]
pub enum ReferenceAction {
    /// Generate a new report ID
    Generate {
        /// How many IDs to generate
        #[arg(short, long, default_value = "1")]
        count: usize,
    },

    /// Check that a report ID is well-formed
    Validate {
        /// Report ID, e.g. RPT-AB12CD34
        id: String,
    },
}

/// Handle reference command
pub fn handle(format: &ReferenceFormat, action: ReferenceAction) -> Result<()> {
    match action {
        ReferenceAction::Generate { count } => {
            let mut rng = rand::thread_rng();
            for _ in 0..count {
                println!("{}", format.generate(&mut rng));
            }
            Ok(())
        }
        ReferenceAction::Validate { id } => {
            let reference = format.validate(&id)?;
            println!("{} is a valid report ID", reference);
            Ok(())
        }
    }
}
