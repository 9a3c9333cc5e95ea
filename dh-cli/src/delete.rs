use dh_core::config::EngineConfig;
use dh_core::deploy::Reconciler;
use dh_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(long, long_help = "application name")]
    pub name: String,

    #[arg(short, long, long_help = "application namespace")]
    pub namespace: String,

    #[arg(short, long, long_help = "owning workspace id")]
    pub workspace: String,
}

pub async fn cmd(args: &Args, client: kube::Client) -> EmptyResult {
    let req = DeleteRequest {
        workspace_id: args.workspace.clone(),
        name: args.name.clone(),
        namespace: args.namespace.clone(),
    };
    println!("removing application {}...", req.slug());

    Reconciler::new(client, EngineConfig::default()).delete(&req).await?;

    println!("done");
    Ok(())
}
