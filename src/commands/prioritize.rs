use super::{open_list, report};
use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PrioritizeArgs {
    /// Task number as shown by `todo view`
    index: usize,

    /// high, medium or low
    level: String,
}

pub fn cmd(args: PrioritizeArgs) -> Result<()> {
    let mut list = open_list(&Config::read()?)?;

    if report(list.prioritize(args.index, &args.level))?.is_some() {
        msg_success!(Message::TaskPrioritized(args.index, args.level.to_lowercase()));
    }
    Ok(())
}
