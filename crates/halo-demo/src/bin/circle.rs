//! Triangle-fan circle shaded by elapsed time.

use halo_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::circle().with_args(std::env::args().skip(1));
    halo_demo::run(config).inspect_err(|e| log::error!("circle: {e:#}"))
}
