//! Cubefall entry point

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Cubefall starting...");
    cubefall::app::run()
}
