//! Task list export to CSV, JSON and Excel.
//!
//! The engine turns the current list into [`ExportRow`]s (one per task, in
//! list order, numbered from 1) and [`Exporter`] writes them in the chosen
//! format.
//!
//! ## Formats
//!
//! - **CSV**: header row followed by one record per task
//! - **JSON**: pretty-printed array of row objects
//! - **Excel**: single worksheet with a bold header row and autofit columns
//!
//! When no output path is given the file is named
//! `todo_export_YYYYMMDD_HHMMSS.<ext>` in the working directory.

use super::codec::DATE_FORMAT;
use super::task::Task;
use crate::libs::messages::Message;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// One task as it appears in an export. Absent annotations are empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub index: usize,
    pub status: String,
    pub priority: String,
    pub description: String,
    pub due_date: String,
    pub category: String,
}

impl ExportRow {
    pub fn from_task(index: usize, task: &Task) -> Self {
        ExportRow {
            index,
            status: if task.is_done() { "Done" } else { "Open" }.to_string(),
            priority: task.priority().glyph().to_string(),
            description: task.description.clone(),
            due_date: task.due_date.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default(),
            category: task.category.clone().unwrap_or_default(),
        }
    }
}

const HEADERS: [&str; 6] = ["#", "Status", "Priority", "Task Description", "Due Date", "Category"];

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let default_name = format!("todo_export_{}", Local::now().format("%Y%m%d_%H%M%S"));
        let output_path =
            output_path.unwrap_or_else(|| PathBuf::from(format!("{}.{}", default_name, format.extension())));

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, rows: &[ExportRow]) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(rows)?,
            ExportFormat::Json => self.export_json(rows)?,
            ExportFormat::Excel => self.export_excel(rows)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, rows: &[ExportRow]) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;

        for row in rows {
            wtr.write_record([
                row.index.to_string(),
                row.status.clone(),
                row.priority.clone(),
                row.description.clone(),
                row.due_date.clone(),
                row.category.clone(),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, rows: &[ExportRow]) -> Result<()> {
        let json = serde_json::to_string_pretty(rows)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, rows: &[ExportRow]) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("To-Do List")?;

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_number(r, 0, row.index as f64)?;
            worksheet.write_string(r, 1, &row.status)?;
            worksheet.write_string(r, 2, &row.priority)?;
            worksheet.write_string(r, 3, &row.description)?;
            worksheet.write_string(r, 4, &row.due_date)?;
            worksheet.write_string(r, 5, &row.category)?;
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
