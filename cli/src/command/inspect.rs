use clap::Args;
use pubdoc::errors::PubdocResult;
use pubdoc::{Epub, EpubOpenOptions};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InspectCommand {
    /// An EPUB file
    pub epub_path: PathBuf,

    /// Display all metadata
    #[arg(long)]
    metadata: bool,

    /// Display the manifest
    #[arg(long)]
    manifest: bool,

    /// Display the spine
    #[arg(long)]
    spine: bool,

    /// Reject EPUBs missing required package elements or attributes
    #[arg(long)]
    strict: bool,
}

impl InspectCommand {
    pub fn run(&self) -> PubdocResult<()> {
        let epub = Epub::open_with(&self.epub_path, EpubOpenOptions::new().strict(self.strict))?;
        self.show_debug(&epub);

        Ok(())
    }

    pub fn has_selected_components(&self) -> bool {
        self.metadata || self.manifest || self.spine
    }

    pub fn show_debug(&self, epub: &Epub) {
        if !self.has_selected_components() {
            println!("{epub:#?}");
            return;
        }

        let debug_structs: &[(bool, &dyn std::fmt::Debug)] = &[
            (self.metadata, epub.metadata()),
            (self.manifest, epub.manifest()),
            (self.spine, epub.spine()),
        ];

        for (is_print, debug_struct) in debug_structs {
            if *is_print {
                println!("{debug_struct:#?}");
            }
        }
    }
}
