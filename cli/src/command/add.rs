use clap::Args;
use pubdoc::EpubOpenOptions;
use pubdoc::errors::PubdocResult;
use pubdoc::pipeline::{self, AddOptions};
use pubdoc::site::{self, DocTemplate};
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct AddCommand {
    /// The EPUB file to add
    pub epub_path: PathBuf,

    /// The directory books are added to
    #[arg(long, default_value = "docs")]
    docs_dir: PathBuf,

    /// A document template with `{{position}}` and `{{content}}` placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Reuse the book directory if it already exists
    #[arg(long)]
    overwrite: bool,

    /// Reject EPUBs missing required package elements or attributes
    #[arg(long)]
    strict: bool,
}

impl AddCommand {
    pub fn run(&self) -> PubdocResult<()> {
        if self.docs_dir.is_relative() && !site::is_project(Path::new(".")) {
            tracing::warn!("the current directory is not a Docusaurus project");
        }
        let template = match &self.template {
            Some(path) => DocTemplate::load(path)?,
            None => DocTemplate::default(),
        };
        let options = AddOptions::new()
            .docs_dir(&self.docs_dir)
            .overwrite(self.overwrite)
            .template(template)
            .open(EpubOpenOptions::new().strict(self.strict));

        let report = pipeline::add_epub(&self.epub_path, &options)?;

        println!(
            "added {} document(s) to {}",
            report.written().len(),
            report.book_dir().display()
        );
        for failure in report.failures() {
            eprintln!(
                "skipped #{} `{}`: {}",
                failure.position, failure.idref, failure.error
            );
        }
        Ok(())
    }
}
