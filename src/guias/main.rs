use clap::Parser;

mod args;
mod cli;

use args::Cli;
use cli::shell::Shell;

fn main() {
    let cli = Cli::parse();

    let mut shell = Shell::new();
    if cli.seeded {
        shell.preseed();
    }

    let stdin = std::io::stdin();
    shell.run(&mut stdin.lock());
}
