use super::{open_list, report};
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_success,
};
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    /// High first, then medium, then low
    Priority,
    /// Tasks without a due date first, then earliest due
    Due,
}

#[derive(Debug, Args)]
pub struct SortArgs {
    #[arg(value_enum, default_value = "priority")]
    by: SortKey,
}

pub fn cmd(args: SortArgs) -> Result<()> {
    let mut list = open_list(&Config::read()?)?;

    let (result, message) = match args.by {
        SortKey::Priority => (list.sort_by_priority(), Message::TasksSortedByPriority),
        SortKey::Due => (list.sort_by_due_date(), Message::TasksSortedByDueDate),
    };

    if report(result)?.is_some() {
        msg_success!(message);
        if !list.is_empty() {
            View::all(list.tasks())?;
        }
    }
    Ok(())
}
