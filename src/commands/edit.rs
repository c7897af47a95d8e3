use super::{open_list, report};
use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task number as shown by `todo view`
    index: usize,

    /// New description; prompted for when omitted
    text: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut list = open_list(&Config::read()?)?;

    // Resolve the task first so an invalid number is reported before prompting
    let current = match report(list.get(args.index).map(|task| task.description.clone()))? {
        Some(description) => description,
        None => return Ok(()),
    };

    let text = match args.text {
        Some(text) => text,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptNewDescription.to_string())
            .with_initial_text(current)
            .interact_text()?,
    };

    if report(list.edit(args.index, &text))?.is_some() {
        msg_success!(Message::TaskEdited(args.index, text.trim().to_string()));
    }
    Ok(())
}
