use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "guias", bin_name = "guias", version)]
#[command(about = "Interactive tutorial catalog browser", long_about = None)]
pub struct Cli {
    /// Start with the example catalog already loaded
    #[arg(long)]
    pub seeded: bool,
}
