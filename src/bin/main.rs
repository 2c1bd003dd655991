mod common;

use color_eyre::eyre::WrapErr;
use color_eyre::Report;

fn main() -> Result<(), Report> {
    common::init()?;
    let (input, config, output) = common::parse_args(
        "main",
        "Plots node tree vs leaf tree benchmark results.",
        true,
    )?;

    // load and build the report before starting python: if anything fails
    // here, nothing is drawn
    let report = treebench_plot::run(&input, &config)
        .wrap_err_with(|| format!("build report from {}", input))?;

    treebench_plot::plot::draw(&report, &config, output.as_deref())
        .wrap_err("draw report")?;
    Ok(())
}
