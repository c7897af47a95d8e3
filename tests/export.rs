#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo_cli::libs::export::{ExportFormat, ExportRow, Exporter};
    use todo_cli::libs::store::MemoryStore;
    use todo_cli::libs::todo_list::TodoList;

    struct ExportTestContext {
        temp_dir: TempDir,
        rows: Vec<ExportRow>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let list = TodoList::open(MemoryStore::with_lines([
                "[ ] 🔥 pay rent (Due: 2024-01-05) [Category: home]",
                "[x] 🔷 call mom",
            ]))
            .unwrap();

            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                rows: list.export_rows(),
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()));

        exporter.export(&ctx.rows).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "#,Status,Priority,Task Description,Due Date,Category");
        assert_eq!(lines[1], "1,Open,🔥,pay rent,2024-01-05,home");
        assert_eq!(lines[2], "2,Done,🔷,call mom,,");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.json");
        let exporter = Exporter::new(ExportFormat::Json, Some(output_path.clone()));

        exporter.export(&ctx.rows).unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let rows: Vec<ExportRow> = serde_json::from_str(&content).unwrap();
        assert_eq!(rows, ctx.rows);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("tasks.xlsx");
        let exporter = Exporter::new(ExportFormat::Excel, Some(output_path.clone()));

        exporter.export(&ctx.rows).unwrap();

        let metadata = std::fs::metadata(&output_path).unwrap();
        assert!(metadata.len() > 0);
    }

    #[test]
    fn test_default_output_name_uses_format_extension() {
        let exporter = Exporter::new(ExportFormat::Excel, None);
        let name = exporter.output_path().to_string_lossy().to_string();

        assert!(name.starts_with("todo_export_"));
        assert!(name.ends_with(".xlsx"));
    }
}
