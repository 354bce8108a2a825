use clap::Parser;
use std::path::PathBuf;
use userdir::convert::convert_file;
use userdir::logger::*;

/// Converts a CSV file with a header row into a JSON array of objects.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = "./csv/test.csv")]
    input: PathBuf,
    #[arg(long, default_value = "./text1.txt")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = Logger::new_bootstrap();

    match convert_file(&args.input, &args.output) {
        Ok(rows) => {
            info!(rows, input = ?args.input, output = ?args.output, "converted");
            Ok(())
        }
        Err(e) => {
            error!("error: {}", e);
            Err(e.into())
        }
    }
}
