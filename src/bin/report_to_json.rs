mod common;

use color_eyre::eyre::WrapErr;
use color_eyre::Report;

fn main() -> Result<(), Report> {
    common::init()?;
    let (input, config, _) = common::parse_args(
        "report_to_json",
        "Prints the node tree vs leaf tree report as json.",
        false,
    )?;

    let report = treebench_plot::run(&input, &config)
        .wrap_err_with(|| format!("build report from {}", input))?;
    let json =
        serde_json::to_string_pretty(&report).wrap_err("serialize report")?;
    println!("{}", json);
    Ok(())
}
