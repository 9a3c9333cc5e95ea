use dh_core::config::EngineConfig;
use dh_core::deploy::Reconciler;
use dh_core::prelude::*;

use crate::apply::load_app;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, long_help = "previously recorded application spec to re-apply")]
    pub file: String,
}

// Only the workload is rolled back; the rest of the application's resources
// are left as they stand.
pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    let app = load_app(&args.file)?;
    println!("rolling back application {}...", app.slug());

    Reconciler::new(client, EngineConfig::default()).rollback(&app).await?;

    println!("done");
    Ok(())
}
