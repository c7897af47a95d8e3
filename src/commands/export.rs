use super::open_list;
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_error,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let list = open_list(&Config::read()?)?;

    if list.is_empty() {
        msg_error!(Message::NoTasksToExport);
        return Ok(());
    }

    let exporter = Exporter::new(args.format, args.output);
    exporter.export(&list.export_rows())?;

    Ok(())
}
