// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use buddhabrot::{Buddhabrot, BuddhaError, MeanMode, PnmSink, RenderConfig, Scheme};
use clap::{App, Arg, ArgMatches};
use log::error;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_size(s: &str) -> Result<(), String> {
    match parse_pair::<u16>(s, 'x') {
        Some((w, h)) if w > 0 && h > 0 => Ok(()),
        Some(_) => Err("Image dimensions must be at least 1x1".to_string()),
        None => Err("Could not parse output image size".to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const SCHEME: &str = "scheme";
const EXACT_MEAN: &str = "exact-mean";
const STATS: &str = "stats";

fn args<'a>() -> ArgMatches<'a> {
    App::new("buddha")
        .version("0.3.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Buddhabrot renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .required(true)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .help("Output file (binary PPM)"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("2880x1800")
                .validator(|s| validate_size(&s))
                .help("Size of output image"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("20000")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1_000_000,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1000000",
                    )
                })
                .help("Maximum number of iterations per orbit"),
        )
        .arg(
            Arg::with_name(SCHEME)
                .required(false)
                .long(SCHEME)
                .short("c")
                .takes_value(true)
                .default_value("max-relative")
                .possible_values(&["percentile", "max-relative", "gamma-cubic"])
                .help("Color scheme"),
        )
        .arg(
            Arg::with_name(EXACT_MEAN)
                .long(EXACT_MEAN)
                .help("Report the mean count as a real number rather than truncating it"),
        )
        .arg(
            Arg::with_name(STATS)
                .long(STATS)
                .help("Print the count distribution after rendering"),
        )
        .get_matches()
}

fn config(matches: &ArgMatches) -> Result<RenderConfig, BuddhaError> {
    let invalid = |msg: &str| BuddhaError::InvalidConfig(msg.to_string());
    let (width, height) = matches
        .value_of(SIZE)
        .and_then(|s| parse_pair::<usize>(s, 'x'))
        .ok_or_else(|| invalid("Error parsing image dimensions"))?;
    let iterations = matches
        .value_of(ITERATIONS)
        .and_then(|s| usize::from_str(s).ok())
        .ok_or_else(|| invalid("Error parsing iteration count"))?;
    let scheme = Scheme::from_str(matches.value_of(SCHEME).unwrap_or_default())
        .map_err(BuddhaError::InvalidConfig)?;
    let mean_mode = if matches.is_present(EXACT_MEAN) {
        MeanMode::Exact
    } else {
        MeanMode::Truncated
    };
    Ok(RenderConfig {
        width,
        height,
        iterations,
        scheme,
        mean_mode,
    })
}

fn run(matches: &ArgMatches) -> Result<(), BuddhaError> {
    let config = config(matches)?;
    let rendering = Buddhabrot::new(config)?.render()?;
    if matches.is_present(STATS) {
        print!("{}", rendering.stats().report(config.iterations));
    }
    let output = matches.value_of(OUTPUT).unwrap_or_default();
    rendering.write(&mut PnmSink::new(output))
}

fn main() {
    env_logger::init();
    let matches = args();
    if let Err(e) = run(&matches) {
        error!("{:?}", e);
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
