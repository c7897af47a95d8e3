use super::open_list;
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_error, msg_print,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Keyword to look for; prompted for when omitted
    keyword: Option<String>,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    let keyword = match args.keyword {
        Some(keyword) => keyword,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSearchKeyword.to_string())
            .interact_text()?,
    };

    let list = open_list(&Config::read()?)?;
    let found = list.search(&keyword);

    if found.is_empty() {
        msg_error!(Message::NoSearchResults(keyword));
        return Ok(());
    }

    msg_print!(Message::SearchResultsHeader(keyword), true);
    View::tasks(found)?;
    Ok(())
}
