use clap::{App, Arg};
use color_eyre::eyre::{self, WrapErr};
use color_eyre::Report;
use std::str::FromStr;
use treebench_plot::{Layout, RenderConfig, Scale, Schema, TimeUnit};

// file written by the tree benchmark
const DEFAULT_INPUT: &str = "tree_benchmark_results.csv";
// one figure per operation is drawn with overlapping, half-transparent lines
const SEQUENCE_LINE_ALPHA: f64 = 0.5;

type Args = (String, RenderConfig, Option<String>);

/// Installs the error report hooks and the tracing subscriber; logs go to
/// stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init() -> Result<(), Report> {
    color_eyre::install()?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

pub fn parse_args(
    name: &str,
    about: &str,
    with_output: bool,
) -> Result<Args, Report> {
    let mut app = App::new(name)
        .version("0.1")
        .author("Vitor Enes <vitorenesduarte@gmail.com>")
        .about(about)
        .arg(
            Arg::with_name("input")
                .value_name("INPUT")
                .help("benchmark results (csv); default: tree_benchmark_results.csv")
                .index(1),
        )
        .arg(
            Arg::with_name("unit")
                .long("unit")
                .value_name("UNIT")
                .help("unit durations are plotted in; default: us")
                .possible_values(&["ns", "us", "ms"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("layout")
                .long("layout")
                .value_name("LAYOUT")
                .help("'grid' (2x2), 'ROWSxCOLS' or 'sequence' (one figure per operation); default: grid")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("scale")
                .long("scale")
                .value_name("SCALE")
                .help("scale of both axes; default: log")
                .possible_values(&["log", "linear"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("x_scale")
                .long("x-scale")
                .value_name("SCALE")
                .help("scale of the x axis; overrides --scale")
                .possible_values(&["log", "linear"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("y_scale")
                .long("y-scale")
                .value_name("SCALE")
                .help("scale of the y axis; overrides --scale")
                .possible_values(&["log", "linear"])
                .takes_value(true),
        )
        .arg(
            Arg::with_name("line_alpha")
                .long("line-alpha")
                .value_name("ALPHA")
                .help("line transparency, in [0, 1]; default: 1, or 0.5 with 'sequence'")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("schema")
                .long("schema")
                .value_name("SCHEMA")
                .help("column naming of the input file; default: auto")
                .possible_values(&["median", "short", "auto"])
                .takes_value(true),
        );
    if with_output {
        app = app.arg(
            Arg::with_name("output")
                .long("output")
                .value_name("OUTPUT")
                .help("file where the report is saved (e.g. report.pdf); if not set, the report is shown on screen")
                .takes_value(true),
        );
    }
    let matches = app.get_matches();

    let input = matches
        .value_of("input")
        .unwrap_or(DEFAULT_INPUT)
        .to_string();
    let output = matches.value_of("output").map(String::from);

    let mut config = RenderConfig::new();
    if let Some(unit) = matches.value_of("unit") {
        config.set_unit(parse::<TimeUnit>(unit, "unit")?);
    }
    if let Some(layout) = matches.value_of("layout") {
        config.set_layout(parse::<Layout>(layout, "layout")?);
    }
    if let Some(scale) = matches.value_of("scale") {
        config.set_scale(parse::<Scale>(scale, "scale")?);
    }
    if let Some(scale) = matches.value_of("x_scale") {
        config.set_x_scale(parse::<Scale>(scale, "x scale")?);
    }
    if let Some(scale) = matches.value_of("y_scale") {
        config.set_y_scale(parse::<Scale>(scale, "y scale")?);
    }
    match matches.value_of("line_alpha") {
        Some(alpha) => {
            let alpha = alpha
                .parse::<f64>()
                .ok()
                .filter(|alpha| (0.0..=1.0).contains(alpha))
                .ok_or_else(|| eyre::eyre!("invalid line alpha {:?}", alpha))?;
            config.set_line_alpha(alpha);
        }
        None if config.layout() == Layout::Sequence => {
            config.set_line_alpha(SEQUENCE_LINE_ALPHA);
        }
        None => {}
    }
    match matches.value_of("schema") {
        Some("median") => config.set_schema(Some(Schema::Median)),
        Some("short") => config.set_schema(Some(Schema::Short)),
        _ => config.set_schema(None),
    }

    tracing::debug!(
        "input: {} | output: {:?} | config: {:?}",
        input,
        output,
        config
    );
    Ok((input, config, output))
}

fn parse<T>(value: &str, what: &str) -> Result<T, Report>
where
    T: FromStr<Err = String>,
{
    value
        .parse::<T>()
        .map_err(|e| eyre::eyre!(e))
        .wrap_err_with(|| format!("invalid {}", what))
}
