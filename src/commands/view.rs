use super::open_list;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let list = open_list(&Config::read()?)?;

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::all(list.tasks())?;
    Ok(())
}
