use super::{open_list, report};
use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task number as shown by `todo view`
    index: usize,
}

pub fn cmd(args: CompleteArgs) -> Result<()> {
    let mut list = open_list(&Config::read()?)?;

    if report(list.complete(args.index))?.is_some() {
        msg_success!(Message::TaskCompleted(args.index));
    }
    Ok(())
}
