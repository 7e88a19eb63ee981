use clap::Parser;
use sprig::cli::{self, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            let inputs = cli::load_inputs(cli.file.as_ref(), &cli);
            let (tree, config) = match inputs {
                Ok(loaded) => loaded,
                Err(e) => {
                    eprintln!("error: {}", e);
                    std::process::exit(1);
                }
            };
            if let Err(e) = sprig::tui::run(tree, config) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Show(args)) => {
            if let Err(e) = cli::cmd_show(args, &cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
