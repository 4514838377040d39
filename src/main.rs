use clap::Parser;
use credstore::cli::commands;
use credstore::cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { length, count } => commands::generate::execute(&cli, length, count),
        Commands::Hash { ref password } => commands::hash::execute(&cli, password.as_deref()),
        Commands::Store {
            ref username,
            ref password,
            generate,
            length,
        } => commands::store::execute(&cli, username, password.as_deref(), generate, length),
        Commands::Verify {
            ref username,
            ref password,
        } => commands::verify::execute(&cli, username, password.as_deref()),
        Commands::List { ref format } => commands::list::execute(&cli, format),
        Commands::Delete {
            ref username,
            force,
        } => commands::delete::execute(&cli, username, force),
        Commands::Backup { ref dest } => commands::backup::execute(&cli, dest),
        Commands::Load { ref src } => commands::load::execute(&cli, src),
        Commands::Audit { last, ref since } => {
            commands::audit_cmd::execute(&cli, last, since.as_deref())
        }
        Commands::Completions { shell } => commands::completions::execute(shell),
    };

    if let Err(e) = result {
        credstore::cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
