//! White quad whose red channel bounces between 0 and 1.

use halo_demo::DemoConfig;

fn main() -> anyhow::Result<()> {
    let config = DemoConfig::quad().with_args(std::env::args().skip(1));
    halo_demo::run(config).inspect_err(|e| log::error!("quad: {e:#}"))
}
