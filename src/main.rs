// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
extern crate failure;
extern crate juliabrot;
extern crate num_cpus;
extern crate pixels;
extern crate winit;

mod window;

use clap::{App, Arg, ArgGroup, ArgMatches, ErrorKind};
use env_logger::Env;
use juliabrot::version::version;
use juliabrot::{Controller, FractalRenderer, Mode};

const WIDTH: usize = 800;
const HEIGHT: usize = 600;
const MODE: &str = "mode";

fn help(mode: Mode) -> &'static str {
    match mode {
        Mode::Julia => "Draw the Julia set; x/X and y/Y move the constant, +/- scale the step",
        Mode::Mandelbrot => "Draw the Mandelbrot set",
        Mode::Colors => "Draw a red/green test gradient",
    }
}

/// Only the first argument selects the mode; anything after it is
/// ignored, so clap never sees it.
fn args<'a, I>(argv: I) -> Result<ArgMatches<'a>, clap::Error>
where
    I: IntoIterator<Item = String>,
{
    let names: Vec<&str> = Mode::ALL.iter().map(|m| m.name()).collect();
    let app = App::new("juliabrot")
        .version(version())
        .author("elf")
        .about("Mandelbrot and Julia bitmap demo")
        .group(ArgGroup::with_name(MODE).args(&names));

    Mode::ALL
        .iter()
        .fold(app, |app, mode| {
            app.arg(
                Arg::with_name(mode.name())
                    .short(mode.short())
                    .help(help(*mode)),
            )
        })
        .get_matches_from_safe(argv.into_iter().take(2))
}

fn mode_of(matches: &ArgMatches<'_>) -> Option<Mode> {
    Mode::ALL
        .iter()
        .cloned()
        .find(|m| matches.is_present(m.name()))
}

fn usage() {
    println!("Version {}", version());
    println!("Usage: juliabrot [-j|-m|-c]");
}

fn main() -> Result<(), failure::Error> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let matches = match args(std::env::args()) {
        Ok(matches) => matches,
        Err(e) => match e.kind {
            ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
            _ => {
                usage();
                return Ok(());
            }
        },
    };

    let mode = match mode_of(&matches) {
        Some(mode) => mode,
        None => {
            usage();
            return Ok(());
        }
    };

    let mut controller = Controller::new(FractalRenderer::new(num_cpus::get()), WIDTH, HEIGHT, mode);
    controller.start()?;
    window::show(controller)
}
