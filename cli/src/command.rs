use clap::Subcommand;

mod add;
mod inspect;
mod new;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new Docusaurus project.
    New(new::NewCommand),
    /// Add an EPUB to the Docusaurus project in the current directory.
    Add(add::AddCommand),
    /// Print the parsed contents of an EPUB.
    Inspect(inspect::InspectCommand),
}
