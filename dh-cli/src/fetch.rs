use std::fs::File;
use std::io::Write;

use dh_core::k8s::DynamicClient;
use dh_core::prelude::*;
use dh_core::selector::{
    Inventory,
    ResourceSelector,
    default_selectors,
};

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        short,
        long,
        long_help = "selector pipeline file (YAML); defaults to the built-in safe inventory policy"
    )]
    pub selectors: Option<String>,

    #[arg(short, long, long_help = "write the inventory here instead of stdout")]
    pub output: Option<String>,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    let selectors: Vec<ResourceSelector> = match &args.selectors {
        Some(path) => serde_yaml::from_reader(File::open(path)?)?,
        None => default_selectors(),
    };

    let objs = Inventory::new(DynamicClient::new(client)).fetch(&selectors).await?;

    // kubectl-compatible multi-doc stream
    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(File::create(path)?),
        None => Box::new(std::io::stdout()),
    };
    for obj in &objs {
        writeln!(out, "---")?;
        serde_yaml::to_writer(&mut out, obj)?;
    }
    Ok(())
}
