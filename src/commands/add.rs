use super::{open_list, report};
use crate::{
    libs::{
        config::Config,
        messages::Message,
        task::NewTask,
        todo_list::parse_priority,
    },
    msg_success,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task description; prompted for when omitted
    description: Option<String>,

    #[arg(short, long)]
    category: Option<String>,

    /// high, medium or low
    #[arg(short, long)]
    priority: Option<String>,

    /// Due date as YYYY-MM-DD
    #[arg(short, long)]
    due: Option<NaiveDate>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    // Validate the priority before prompting so a typo does not cost a retype
    let Some(priority) = report(args.priority.as_deref().map(parse_priority).transpose())? else {
        return Ok(());
    };

    let description = match args.description {
        Some(description) => description,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskDescription.to_string())
            .interact_text()?,
    };

    let mut list = open_list(&Config::read()?)?;
    let new_task = NewTask {
        description: description.clone(),
        category: args.category,
        priority,
        due_date: args.due,
    };

    if report(list.add(new_task))?.is_some() {
        msg_success!(Message::TaskAdded(description.trim().to_string()));
    }
    Ok(())
}
