use super::{open_list, report};
use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let mut list = open_list(&Config::read()?)?;

    if report(list.undo())?.is_some() {
        msg_success!(Message::UndoCompleted);
    }
    Ok(())
}
