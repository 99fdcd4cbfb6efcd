//! `kraft cloud` subcommands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use kraftkit_cloud_autoscale::{DefaultCredentialProvider, RemoveOptions};
use log::debug;

const REMOVE_EXAMPLES: &str = "\
Examples:
  # Delete an autoscale configuration policy by UUID
  $ kraft cloud scale remove fd1684ea-7970-4994-92d6-61dcc7905f2b my-policy";

#[derive(Args, Debug)]
pub(crate) struct CloudArgs {
    /// KraftCloud metro to target [env: KRAFTCLOUD_METRO]
    #[arg(long, global = true, value_name = "METRO")]
    pub(crate) metro: Option<String>,

    #[command(subcommand)]
    command: CloudCommands,
}

#[derive(Subcommand, Debug)]
enum CloudCommands {
    /// Manage autoscale configurations of service groups
    Scale {
        #[command(subcommand)]
        command: ScaleCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ScaleCommands {
    /// Delete an autoscale configuration policy
    #[command(
        visible_aliases = ["delete", "del", "rm"],
        override_usage = "kraft cloud scale remove [FLAGS] UUID NAME",
        after_help = REMOVE_EXAMPLES
    )]
    Remove(RemoveArgs),
}

#[derive(Args, Debug)]
struct RemoveArgs {
    /// Service group UUID followed by the policy name
    #[arg(value_name = "ARGS")]
    args: Vec<String>,
}

pub(crate) async fn run(cloud: CloudArgs) -> Result<()> {
    match cloud.command {
        CloudCommands::Scale {
            command: ScaleCommands::Remove(remove),
        } => remove_policy(cloud.metro.as_deref(), &remove.args).await,
    }
}

async fn remove_policy(metro: Option<&str>, args: &[String]) -> Result<()> {
    let mut opts = RemoveOptions::default();
    opts.pre(args, metro)?;

    let credentials = DefaultCredentialProvider::new();
    tokio::select! {
        result = opts.run(&credentials, args) => Ok(result?),
        _ = tokio::signal::ctrl_c() => {
            debug!("received interrupt, dropping in-flight request");
            Err(anyhow!("interrupted"))
        }
    }
}
