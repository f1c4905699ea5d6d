#[macro_use]
extern crate log;

mod error;
mod command;

use self::error::*;
use self::command::*;

use owp_slider::*;

use clap::{App, Arg, ArgMatches, SubCommand};

use std::fs;
use std::io::{stdin, Read};
use std::process;
use std::str::{FromStr};

fn main() {
    env_logger::init();

    // Fetch the parameters
    let params = App::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .author("Andrew Hunter")
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .after_help(concat!("Slider definitions are JSON files of the form:\n",
            "\n",
            "    { \"points\": [[0, 0], [50, 0], [50, 50]], \"length\": 80.0 }\n",
            "\n",
            "Set RUST_LOG=debug to see how the curves are being processed.\n"))
        .arg(Arg::with_name("input-from-file")
            .long("input-from-file")
            .short("I")
            .takes_value(true)
            .help("Specifies the slider definition file to read (standard input is read if this isn't specified)"))
        .subcommand(SubCommand::with_name("centre")
            .about("Writes out the flattened centre line of the slider"))
        .subcommand(SubCommand::with_name("contour")
            .about("Writes out the outline of the slider")
            .arg(Arg::with_name("radius")
                .long("radius")
                .short("r")
                .takes_value(true)
                .required(true)
                .help("The distance from the centre line to the outline")))
        .subcommand(SubCommand::with_name("bounds")
            .about("Writes out the bounding box of the slider's centre line"))
        .subcommand(SubCommand::with_name("length")
            .about("Compares the authored length of the slider with the length of its centre line"))
        .get_matches();

    match run(&params) {
        Ok(output)  => { println!("{}", output); }
        Err(err)    => {
            eprintln!("ERROR: {}", err);
            process::exit(1);
        }
    }
}

///
/// Reads the command from the parameters
///
fn parse_command(params: &ArgMatches) -> Result<SliderCommand, DiagError> {
    if params.subcommand_matches("centre").is_some() {
        Ok(SliderCommand::Centre)
    } else if let Some(contour) = params.subcommand_matches("contour") {
        let radius = contour.value_of("radius").unwrap_or("");
        let radius = f64::from_str(radius).map_err(|_| DiagError::InvalidRadius(radius.to_string()))?;

        Ok(SliderCommand::Contour(radius))
    } else if params.subcommand_matches("bounds").is_some() {
        Ok(SliderCommand::Bounds)
    } else if params.subcommand_matches("length").is_some() {
        Ok(SliderCommand::Length)
    } else {
        Err(DiagError::NoCommand)
    }
}

///
/// Reads the slider definition, from a file if one is specified or from standard input if not
///
fn read_definition(params: &ArgMatches) -> Result<SliderDefinition, DiagError> {
    let input_data = if let Some(input_file) = params.value_of("input-from-file") {
        fs::read_to_string(input_file)?
    } else {
        let mut input_data = String::new();
        stdin().read_to_string(&mut input_data)?;
        input_data
    };

    Ok(SliderDefinition::from_json(&input_data)?)
}

fn run(params: &ArgMatches) -> Result<String, DiagError> {
    let command     = parse_command(params)?;
    let definition  = read_definition(params)?;
    let slider      = definition.to_slider_curve()?;

    info!("Slider has {} anchor points and {} curves", slider.raw_points().len(), slider.curves().len());

    command.run(&slider)
}
