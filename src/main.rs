use clap::{Parser, Subcommand};
use generate::EmsrGenerator;
use protection::Solve;

mod instance;
mod generate;
mod protection;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct EmsrTools {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    Generate(EmsrGenerator),
    Solve(Solve)
}

fn main() {
    let cli = EmsrTools::parse();
    match cli.command {
        Command::Generate(mut generate) => generate.generate(),
        Command::Solve(solve) => solve.solve()
    }
}
