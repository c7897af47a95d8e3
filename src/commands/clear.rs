use super::{open_list, report};
use crate::{
    libs::{config::Config, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct ClearArgs {
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: ClearArgs) -> Result<()> {
    let config = Config::read()?;
    let mut list = open_list(&config)?;

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    if config.confirm_clear && !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmClearTasks(list.len()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if let Some(count) = report(list.clear())? {
        msg_success!(Message::TasksCleared(count));
    }
    Ok(())
}
