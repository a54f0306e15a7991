use rgbseam::{PixelGrid, SeamCarver};
use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use log::info;

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, failure::Error> {
    match matches.value_of(name) {
        Some(v) => Ok(v.parse()?),
        None => Ok(current),
    }
}

fn run() -> Result<(), failure::Error> {
    let matches = App::new("rgbseam")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Shrink an image by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the carved image")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("width")
                .help("Target width (defaults to the current width)")
                .long("width")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("height")
                .help("Target height (defaults to the current height)")
                .long("height")
                .takes_value(true),
        )
        .get_matches();

    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();

    let image = image::open(input)?;
    let grid = PixelGrid::from_image(&image)?;
    let (width, height) = grid.dimensions();
    let new_width = dimension(&matches, "width", width)?;
    let new_height = dimension(&matches, "height", height)?;

    info!("carving {} from {}x{} to {}x{}", input, width, height, new_width, new_height);
    let mut carver = SeamCarver::new(grid);
    carver.carve(new_width, new_height)?;
    carver.image().to_image().save(output)?;
    info!("wrote {}", output);
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("rgbseam: {}", err);
        process::exit(1);
    }
}
