use slothtest_core::api::{
    apply_env_overrides, load_default, load_from_path, process_exit_code, AppConfig, AppContext,
    CliError,
};
use slothtest_plugins::factory;

use crate::commands::cli::Args;

/// Runs once or watches, and returns the process exit code.
pub async fn run_app(args: Args) -> Result<i32, CliError> {
    let cfg = args.overlay(load_config(&args)?).resolve();
    tracing::debug!(
        target: "slothtest.cli",
        emojis = cfg.display.emojis,
        dance = cfg.display.dance,
        nofun = cfg.display.nofun,
        watch = cfg.watch.enabled,
        "config resolved"
    );

    let renderer = factory::build_renderer(&cfg.display);
    let picker = factory::build_picker();
    let mut ctx = AppContext::new(cfg, renderer, picker);

    ctx.renderer().welcome();
    if ctx.cfg().display.nofun {
        ctx.renderer().fun_disabled();
    }

    if ctx.cfg().watch.enabled {
        let exit = ctx.watch().await?;
        tracing::info!(target: "slothtest.cli", ?exit, runs = ctx.runs(), "watcher stopped");
        return Ok(0);
    }

    let report = ctx.run_once().await;
    Ok(process_exit_code(&report, &ctx.cfg().exit))
}

fn load_config(args: &Args) -> Result<AppConfig, CliError> {
    let cfg = match &args.config {
        Some(path) => apply_env_overrides(load_from_path(path)?, |key| std::env::var(key).ok())?,
        None => load_default()?,
    };
    Ok(cfg)
}
