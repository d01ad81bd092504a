//! Queueing-shop simulation runner.
//!
//! Reads whitespace-separated tokens from the file named by the first
//! argument, or from stdin when no file is given. The first token is the
//! server count; every remaining token is a customer arrival time, in any
//! order. Prints the event log and the final statistics line, and
//! optionally exports the log as CSV.

use std::env;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use shop_queue::{Simulator, output};

struct Config {
    input: Option<PathBuf>,
    csv: Option<PathBuf>,
}

impl Config {
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Config, String> {
        let mut input = None;
        let mut csv = None;
        while let Some(arg) = args.next() {
            if arg == "--csv" {
                let path = args.next().ok_or_else(|| "--csv needs a path".to_string())?;
                csv = Some(PathBuf::from(path));
            } else if input.is_none() {
                input = Some(PathBuf::from(arg));
            } else {
                return Err(format!("unexpected argument: {arg}"));
            }
        }
        Ok(Config { input, csv })
    }
}

fn read_input(path: Option<&Path>) -> Result<String, String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| format!("unable to open file {}: {err}", path.display())),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|err| format!("unable to read stdin: {err}"))?;
            Ok(buffer)
        }
    }
}

/// First token is the server count, the rest are arrival times.
fn parse_input(input: &str) -> Result<(usize, Vec<f64>), String> {
    let mut tokens = input.split_whitespace();
    let num_servers = tokens
        .next()
        .ok_or_else(|| "missing server count".to_string())?
        .parse::<usize>()
        .map_err(|err| format!("bad server count: {err}"))?;
    let arrivals = tokens
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|err| format!("bad arrival time {token:?}: {err}"))
        })
        .collect::<Result<Vec<f64>, String>>()?;
    Ok((num_servers, arrivals))
}

fn main() {
    let config = match Config::from_args(env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: shop_queue [input-file] [--csv <path>]");
            process::exit(1);
        }
    };

    let input = read_input(config.input.as_deref()).unwrap_or_else(|message| {
        eprintln!("{message}");
        process::exit(1);
    });
    let (num_servers, arrivals) = parse_input(&input).unwrap_or_else(|message| {
        eprintln!("{message}");
        process::exit(1);
    });

    let state = Simulator::new(num_servers, &arrivals).run();

    for entry in state.log() {
        println!("{entry}");
    }
    println!("{}", state.stats());

    if let Some(path) = config.csv {
        if let Err(err) = output::write_log_csv(&path, state.log()) {
            eprintln!("failed to write {}: {err}", path.display());
            process::exit(1);
        }
    }
}
