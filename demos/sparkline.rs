//! Render sparkline graph from JSON serialized options
#![deny(warnings)]

use sparkgraph::*;
use std::{
    fs::File,
    io::{BufReader, BufWriter, Write},
};
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan};

type Error = Box<dyn std::error::Error>;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_span_events(FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<_> = std::env::args().collect();
    let (input, output) = match args.as_slice() {
        [_, input, output] => (input, output),
        [cmd, ..] => {
            eprintln!("Render sparkline graph from JSON serialized options");
            eprintln!("USAGE:");
            eprintln!("    {} <options|-> <output|->", cmd);
            std::process::exit(1);
        }
        _ => unreachable!(),
    };

    let options = if input != "-" {
        GraphOptions::from_reader(BufReader::new(File::open(input)?))?
    } else {
        GraphOptions::from_reader(std::io::stdin().lock())?
    };
    let drawing = tracing::debug_span!("[generate]").in_scope(|| generate_graph(&options))?;

    if output != "-" {
        let mut file = BufWriter::new(File::create(output)?);
        drawing.save(&mut file)?;
        file.flush()?;
    } else {
        drawing.save(std::io::stdout().lock())?;
    }

    Ok(())
}
