use anyhow::Result;
use clap::Parser as ClapParser;
use ffd::io;
use ffd::io::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    io::main_ffd(&args).map(|_| ())
}
