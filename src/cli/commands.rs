use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "todo", about = concat!("todo-panel v", env!("CARGO_PKG_VERSION"), " - one screen, one list"), version)]
pub struct Cli {
    /// Directory holding todo.toml and storage.json
    #[arg(short = 'D', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is read from or written to disk
    #[arg(long)]
    pub ephemeral: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() {
        let cli = Cli::parse_from(["todo", "-D", "/tmp/todos", "--ephemeral"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/todos")));
        assert!(cli.ephemeral);

        let cli = Cli::parse_from(["todo"]);
        assert!(cli.data_dir.is_none());
        assert!(!cli.ephemeral);
    }
}
