fn main() -> anyhow::Result<()> {
    gildedrose_observability::init();

    let config = gildedrose_simulator::SimulatorConfig::from_env()?
        .with_args(std::env::args().skip(1))?;

    tracing::info!(days = config.days, format = %config.format, "starting simulation");

    let output = gildedrose_simulator::run(&config)?;
    print!("{output}");

    Ok(())
}
