use clap::Parser;

use incidence_deck::cli::{Cli, Commands};
use incidence_deck::commands::{run_categories, run_config, run_generate, run_init};
use incidence_deck::logging;
use incidence_deck::output::ErrorOutput;

fn main() {
    let cli = Cli::parse();
    let ansi = ErrorOutput::new(cli.color.into()).use_colors();
    logging::init(cli.verbose, cli.quiet, ansi);

    let exit_code = match &cli.command {
        Commands::Generate(args) => run_generate(args, &cli),
        Commands::Categories(args) => run_categories(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
