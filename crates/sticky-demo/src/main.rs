#![forbid(unsafe_code)]

//! Sticky header sweep binary entry point.

use std::process;

use sticky_core::StickyConfig;
use sticky_demo::{cli, output};
use sticky_harness::ScrollSimulation;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // Logs go to stderr so JSONL on stdout stays clean.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_tracing();
    let opts = cli::Opts::parse();

    let config = match StickyConfig::from_env() {
        Ok(base) => opts.apply_to(base),
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        process::exit(1);
    }

    let model = opts.model();
    let end = match opts.sweep_end(&model) {
        Ok(end) => end,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    info!(
        sections = model.sections.len(),
        start = opts.start,
        end,
        step = opts.step,
        top_inset = config.top_inset,
        handoff = config.handoff.as_str(),
        "starting sweep"
    );

    let mut sim = ScrollSimulation::with_config(model, config);
    let frames = sim.sweep(opts.start, end, opts.step);
    info!(frames = frames.len(), "sweep finished");

    if let Err(e) = output::emit(&opts, &frames, std::io::stdout().lock()) {
        eprintln!("Output error: {e}");
        process::exit(1);
    }
}
