use clap::Args;
use pubdoc::errors::PubdocResult;
use pubdoc::site;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct NewCommand {
    /// The project directory to create
    pub project_name: PathBuf,
}

impl NewCommand {
    pub fn run(&self) -> PubdocResult<()> {
        let written = site::new_project(&self.project_name)?;

        for path in written {
            println!("created {}", path.display());
        }
        Ok(())
    }
}
