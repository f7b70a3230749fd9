use clap::Parser;
use todo_panel::cli::commands::Cli;
use todo_panel::io::config_io::default_data_dir;
use todo_panel::tui::RunOptions;

fn main() {
    let cli = Cli::parse();
    let data_dir = default_data_dir(cli.data_dir.as_deref());

    if !cli.ephemeral {
        if let Err(e) = todo_panel::logging::init(&data_dir) {
            eprintln!("warning: logging disabled: {}", e);
        }
    }
    tracing::info!(data_dir = %data_dir.display(), ephemeral = cli.ephemeral, "starting");

    let options = RunOptions {
        data_dir,
        ephemeral: cli.ephemeral,
    };
    if let Err(e) = todo_panel::tui::run(&options) {
        tracing::error!(error = %e, "exited with error");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
