mod app;
mod cli;
mod field;
mod view;

use anyhow::{Context, Result};
use winit::dpi::LogicalSize;

use cubefield_engine::device::GpuInit;
use cubefield_engine::logging::{LoggingConfig, init_logging};
use cubefield_engine::window::{Runtime, RuntimeConfig};

use crate::app::{Viewer, ViewerOptions};
use crate::cli::Cli;
use crate::field::{CubeField, FieldConfig};

fn main() {
    let cli = Cli::from_env();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    if let Err(err) = run(cli) {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Some(display) = cli.display.as_deref() {
        // SAFETY: no other thread exists yet to read the environment concurrently.
        unsafe { std::env::set_var("DISPLAY", display) };
    }
    let display = std::env::var("DISPLAY").unwrap_or_else(|_| "<default>".to_string());

    let config = runtime_config(&cli);

    let field = CubeField::new(
        FieldConfig {
            count: cli.cubes as usize,
            ..FieldConfig::default()
        },
        cli.seed,
    );
    log::info!(
        "{} cubes, seed {}",
        field.cubes().len(),
        cli.seed.map_or_else(|| "random".to_string(), |s| s.to_string())
    );

    let viewer = Viewer::new(
        ViewerOptions {
            title: config.title.clone(),
            print_info: cli.info,
            trace_cubes: cli.trace_cubes,
        },
        field,
    );

    Runtime::run(config, GpuInit::default(), viewer)
        .with_context(|| format!("cubefield failed on display {display}"))
}

/// Window settings from the command line. An explicit `--display` names an X
/// server, so the X11 backend is used even inside a Wayland session.
fn runtime_config(cli: &Cli) -> RuntimeConfig {
    RuntimeConfig {
        initial_size: LogicalSize::new(f64::from(cli.width), f64::from(cli.height)),
        force_x11: cli.display.is_some(),
        ..RuntimeConfig::default()
    }
}
