use std::fs::File;

use dh_core::config::EngineConfig;
use dh_core::deploy::Reconciler;
use dh_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(short, long, long_help = "application spec file (YAML or JSON)")]
    pub file: String,
}

pub fn load_app(path: &str) -> anyhow::Result<AppSpec> {
    Ok(serde_yaml::from_reader(File::open(path)?)?)
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    let app = load_app(&args.file)?;
    println!("deploying application {}...", app.slug());

    Reconciler::new(client, EngineConfig::default()).upsert(&app).await?;

    println!("done");
    Ok(())
}
