// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use seamcarve::{calculate_energy, load_image, save_energy, save_image, Reduction, SeamCarver};
use std::env;
use std::ffi::OsString;
use std::process;

extern crate clap;

use clap::{crate_version, value_t, App, AppSettings, Arg, ArgMatches};
use env_logger::Env;
use failure::err_msg;
use log::error;

// The traditional spelling of the flags is `-in`, `-width` and so
// on, which clap would read as bundles of short flags.
const LONG_FLAGS: [&str; 5] = ["in", "out", "width", "height", "energy"];

fn normalize_args<I: IntoIterator<Item = OsString>>(args: I) -> Vec<OsString> {
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(flag) if flag.starts_with('-') && LONG_FLAGS.contains(&&flag[1..]) => {
                OsString::from(format!("-{}", flag))
            }
            _ => arg,
        })
        .collect()
}

fn is_count(v: String) -> Result<(), String> {
    v.parse::<usize>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a non-negative whole number", v))
}

fn cli() -> App<'static, 'static> {
    App::new("seamcarve")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image shrinking by seam carving")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("in")
                .long("in")
                .value_name("FILE")
                .help("The image to carve")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("out")
                .long("out")
                .value_name("FILE")
                .help("Where to write the carved image (always PNG)")
                .takes_value(true)
                .required(true),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("INT")
                .help("How many columns to remove")
                .takes_value(true)
                .required(true)
                .validator(is_count),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("INT")
                .help("How many rows to remove")
                .takes_value(true)
                .required(true)
                .validator(is_count),
        )
        .arg(
            Arg::with_name("energy")
                .long("energy")
                .value_name("FILE")
                .help("Also write the input's energy map as a greyscale PNG")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for even more"),
        )
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(level)).init();
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let reduction = Reduction::new(
        value_t!(matches, "width", usize).unwrap_or_else(|e| e.exit()),
        value_t!(matches, "height", usize).unwrap_or_else(|e| e.exit()),
    );
    let source = matches
        .value_of_os("in")
        .ok_or_else(|| err_msg("no input image given"))?;
    let target = matches
        .value_of_os("out")
        .ok_or_else(|| err_msg("no output image given"))?;

    let image = load_image(source)?;
    let energy = matches
        .value_of_os("energy")
        .map(|path| (path, calculate_energy(image.grid())));

    // Nothing is written until the carve has accepted its inputs.
    let carved = SeamCarver::new().carve(image, reduction)?;
    if let Some((path, energy)) = energy {
        save_energy(&energy, path)?;
    }
    save_image(&carved, target)?;
    Ok(())
}

fn main() {
    let matches = cli().get_matches_from(normalize_args(env::args_os()));
    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        let mut causes = err.iter_chain();
        if let Some(first) = causes.next() {
            error!("{}", first);
        }
        for cause in causes {
            error!("  caused by: {}", cause);
        }
        process::exit(1);
    }
}
