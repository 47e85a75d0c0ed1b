//! Example walking through the helpers used while writing benchmark results

use anyhow::Result;
use bench_util::prelude::*;
use bench_util::{
    common_base_dir, expand_file_name_pattern, format_number, get_list_from_xml, tracing_init,
    xml_to_string,
};
use tracing::{info, info_span};

const BENCHMARK: &str = r#"<benchmark tool="cpachecker" timelimit="900">
  <option name="-heap">1200M</option>
  <option name="-noout"/>
  <sourcefiles>
    <include>programs/*.c</include>
  </sourcefiles>
</benchmark>"#;

fn main() -> Result<()> {
    std::env::set_var("RUST_LOG", "debug");
    tracing_init::init()?;

    let span = info_span!("results_demo");
    let _enter = span.enter();

    let benchmark = Element::parse(BENCHMARK)?;
    let options = get_list_from_xml(&benchmark, "option", &["name"]);
    info!(?options, "tool options");

    let mut run = benchmark.shallow_copy();
    run.set("status", "done");
    println!("{}", xml_to_string(&run));

    let cwd = std::env::current_dir()?;
    let files = expand_file_name_pattern("*.toml", &cwd);
    info!(count = files.len(), base = ?common_base_dir(&files), "expanded pattern");

    match EnergyReader::discover(EnergyDomain::Cpu) {
        Some(reader) => match reader.sample() {
            Some(sample) => info!(value = sample.value, "energy counter"),
            None => info!("energy helper produced no value"),
        },
        None => info!("energy measurement unavailable"),
    }

    println!("walltime: {}s", format_number(Some(12.3456), 2));
    Ok(())
}
