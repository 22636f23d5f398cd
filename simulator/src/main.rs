use anyhow::Context;
use api::bridge::DetectionApi;
use clap::Parser;
use log::info;
use std::path::PathBuf;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;
use workflow::config::SimulatorConfig;
use workflow::runner::Runner;

mod api;
mod generator;
mod workflow;

#[derive(Parser)]
#[command(author, version, about = "Synthetic detection source for the CRC dashboard")]
struct Args {
    /// Load simulator settings from YAML
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, default_value_t = 200)]
    records: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
    #[arg(long, default_value_t = 9000)]
    port: u16,
    /// Write the generated records to a JSON fixture
    #[arg(long)]
    dump: Option<PathBuf>,
    /// Require `Authorization: Bearer <token>` on the detections route
    #[arg(long)]
    require_token: Option<String>,
    /// Serve the records at /api/detections/result until Ctrl+C
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = if let Some(path) = args.config {
        SimulatorConfig::load(path)?
    } else {
        SimulatorConfig::from_args(args.records, args.seed, args.port)
    };

    let runner = Runner::new(config.clone());
    let summary = runner.execute()?;
    println!(
        "Generated {} detections ({} recyclable) across years {:?}",
        summary.records.len(),
        summary.recyclable,
        summary.years
    );

    if let Some(path) = args.dump.as_ref() {
        runner.dump(&summary, path)?;
        info!("fixture written to {}", path.display());
    }

    if args.serve {
        let api = DetectionApi::new(args.require_token);
        api.publish(summary.records);
        let address = config.bind_address();
        let runtime = TokioBuilder::new_multi_thread()
            .enable_all()
            .build()
            .context("creating runtime for the detection API")?;
        runtime.block_on(async {
            tokio::select! {
                _ = api.serve(address) => {}
                result = signal::ctrl_c() => {
                    result.context("awaiting Ctrl+C to exit")?;
                    info!("shutting down detection API");
                }
            }
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
