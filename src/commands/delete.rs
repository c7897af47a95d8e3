use super::{open_list, report};
use crate::{
    libs::{codec, config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task number as shown by `todo view`
    index: usize,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut list = open_list(&Config::read()?)?;

    if let Some(removed) = report(list.delete(args.index))? {
        msg_success!(Message::TaskDeleted(codec::encode(&removed)));
    }
    Ok(())
}
