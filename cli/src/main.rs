use clap::Parser;
use pubdoc::errors::PubdocResult;
use pubdoc_cli::Cli;
use pubdoc_cli::command::Commands;
use tracing_subscriber::EnvFilter;

fn main() -> PubdocResult<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(cli.log_level().into())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.commands {
        Commands::New(new) => new.run()?,
        Commands::Add(add) => add.run()?,
        Commands::Inspect(inspect) => inspect.run()?,
    }

    Ok(())
}
