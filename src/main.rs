use geojson_shapes::contains::BoundaryRule;
use geojson_shapes::geometry::Coordinate;
use geojson_shapes::logging::init_logging;
use geojson_shapes::output::Output;
use geojson_shapes::{filter, load_shapes, locate};
use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(StructOpt, Debug)]
enum Command {
    /// Convert the features of a GeoJSON file into renderable shapes
    Shapes {
        #[structopt(parse(from_os_str))]
        input: PathBuf,
        /// Property used as title for each feature
        #[structopt(short, long)]
        title_key: Option<String>,
        /// Property filter, e.g. "boro_name~Brooklyn+ntaname,park"
        #[structopt(short, long)]
        filter: Option<String>,
        /// Write a GeoJSON FeatureCollection instead of JSON lines
        #[structopt(long)]
        geojson: bool,
    },
    /// Print the areas of a GeoJSON file containing a coordinate
    Locate {
        #[structopt(parse(from_os_str))]
        input: PathBuf,
        #[structopt(long, allow_hyphen_values = true)]
        lon: f64,
        #[structopt(long, allow_hyphen_values = true)]
        lat: f64,
        /// Property used as title for each feature
        #[structopt(short, long)]
        title_key: Option<String>,
        /// Treat points on a ring edge as outside
        #[structopt(long)]
        exclusive: bool,
    },
}

#[derive(StructOpt, Debug)]
#[structopt(name = "geojson_shapes")]
struct Opt {
    /// Log more, repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
    #[structopt(subcommand)]
    command: Command,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();
    init_logging(opt.verbose);

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match opt.command {
        Command::Shapes {
            input,
            title_key,
            filter,
            geojson,
        } => {
            let file = BufReader::new(File::open(input)?);
            let groups = filter.as_deref().map(filter::parse).unwrap_or_default();
            let shapes = load_shapes(file, title_key.as_deref(), &groups)?;
            if geojson {
                shapes.write_geojson(&mut handle)?;
            } else {
                shapes.write_json_lines(&mut handle)?;
            }
        }
        Command::Locate {
            input,
            lon,
            lat,
            title_key,
            exclusive,
        } => {
            let file = BufReader::new(File::open(input)?);
            let rule = if exclusive {
                BoundaryRule::Exclusive
            } else {
                BoundaryRule::Inclusive
            };
            let point = Coordinate::new(lon, lat);
            let shapes = locate(file, title_key.as_deref(), point, rule)?;
            shapes.write_json_lines(&mut handle)?;
        }
    }
    Ok(())
}
