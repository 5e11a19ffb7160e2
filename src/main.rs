#![deny(warnings)]

use clap::Parser;
use color_eyre::eyre::Result;

use trackboard::{
    infrastructure::{cli::Cli, config::Config, tui::real::Tui},
    integration::Host,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();
    let config = Config::new()?;
    tracing::info!(
        view = %args.view,
        config_dir = %config.config.config_dir.display(),
        data_dir = %config.config.data_dir.display(),
        "starting"
    );

    let mut tui = Tui::new()?
        .tick_rate(args.tick_rate)
        .frame_rate(args.frame_rate);
    let mut host = Host::with_selection(args.view, config.keybindings);
    host.run(&mut tui).await?;

    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
