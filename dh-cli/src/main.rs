mod apply;
mod delete;
mod fetch;
mod rollback;

use clap::{
    Parser,
    Subcommand,
    crate_version,
};
use dh_core::logging;
use dh_core::prelude::*;

#[derive(Parser)]
#[command(
    about = "command-line interface for the Deckhand reconciliation engine",
    version,
    propagate_version = true
)]
struct DhCommandRoot {
    #[command(subcommand)]
    subcommand: DhSubcommand,

    #[arg(short, long, default_value = "warn")]
    verbosity: String,
}

#[derive(Subcommand)]
enum DhSubcommand {
    #[command(about = "deploy an application from a spec file", visible_alias = "a")]
    Apply(apply::Args),

    #[command(
        about = "remove a deployed application's resources",
        visible_aliases = &["d", "del", "rm"],
    )]
    Delete(delete::Args),

    #[command(about = "inventory cluster resources as a YAML stream", visible_alias = "f")]
    Fetch(fetch::Args),

    #[command(about = "re-apply a previously recorded workload spec")]
    Rollback(rollback::Args),

    #[command(about = "dhctl version")]
    Version,
}

#[tokio::main]
async fn main() -> EmptyResult {
    let args = DhCommandRoot::parse();
    logging::setup(&args.verbosity);

    match &args.subcommand {
        DhSubcommand::Apply(args) => {
            let client = kube::Client::try_default().await?;
            apply::cmd(args, client).await
        },
        DhSubcommand::Delete(args) => {
            let client = kube::Client::try_default().await?;
            delete::cmd(args, client).await
        },
        DhSubcommand::Fetch(args) => {
            let client = kube::Client::try_default().await?;
            fetch::cmd(args, client).await
        },
        DhSubcommand::Rollback(args) => {
            let client = kube::Client::try_default().await?;
            rollback::cmd(args, client).await
        },
        DhSubcommand::Version => {
            println!("dhctl {}", crate_version!());
            Ok(())
        },
    }
}
