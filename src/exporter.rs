use crate::model::RecipeRecord;
use crate::ScrapeError;
use log::{info, warn};
use std::path::Path;

/// Byte order mark that makes spreadsheet tools read the file as UTF-8
const UTF8_BOM: &str = "\u{feff}";

/// Writes one `name,url,ingredients` line per record.
///
/// Fields are written as-is, without quoting.
#[derive(Debug, Default, Clone, Copy)]
pub struct CsvExporter;

impl CsvExporter {
    /// Full file contents for `records`, BOM included
    pub fn render(records: &[RecipeRecord]) -> String {
        Self::render_lines(records).0
    }

    /// File contents and the number of lines they hold
    fn render_lines(records: &[RecipeRecord]) -> (String, usize) {
        let mut output = String::from(UTF8_BOM);
        let mut lines = 0;
        for line in records.iter().map(RecipeRecord::to_line) {
            if line.is_empty() {
                continue;
            }
            output.push_str(&line);
            output.push('\n');
            lines += 1;
        }
        (output, lines)
    }

    /// Writes `records` to `path` and returns the number of lines written.
    /// With no records nothing is written.
    pub async fn write(
        &self,
        records: &[RecipeRecord],
        path: &Path,
    ) -> Result<usize, ScrapeError> {
        if records.is_empty() {
            warn!("No recipes to save");
            return Ok(0);
        }

        let (contents, lines) = Self::render_lines(records);
        tokio::fs::write(path, contents).await?;

        info!("Saved {} recipes to {}", lines, path.display());
        Ok(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Ingredient;

    fn record(id: u32, ingredients: Vec<Ingredient>) -> RecipeRecord {
        RecipeRecord {
            name: format!("食譜{id}"),
            url: format!("https://icook.tw/recipes/{id}"),
            ingredients,
        }
    }

    #[test]
    fn test_render_starts_with_bom() {
        let rendered = CsvExporter::render(&[
            record(1, vec![Ingredient::new("蜂蜜", "1大匙"), Ingredient::new("鹽", "")]),
            record(2, Vec::new()),
        ]);

        assert_eq!(
            rendered,
            "\u{feff}食譜1,https://icook.tw/recipes/1,蜂蜜1大匙, 鹽\n食譜2,https://icook.tw/recipes/2,\n"
        );
        assert!(rendered.as_bytes().starts_with(&[0xEF, 0xBB, 0xBF]));
    }

    #[tokio::test]
    async fn test_write_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.csv");

        let written = CsvExporter
            .write(&[record(7, vec![Ingredient::new("米酒", "1/2大匙")])], &path)
            .await
            .unwrap();

        assert_eq!(written, 1);
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "\u{feff}食譜7,https://icook.tw/recipes/7,米酒1/2大匙\n");
    }

    #[tokio::test]
    async fn test_write_reports_lines_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recipes.csv");
        let records = [
            record(1, vec![Ingredient::new("蜂蜜", "1大匙")]),
            record(2, Vec::new()),
            record(3, vec![Ingredient::new("鹽", "")]),
        ];

        let written = CsvExporter.write(&records, &path).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, contents.lines().count());
        assert_eq!(written, 3);
    }

    #[tokio::test]
    async fn test_no_records_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        let written = CsvExporter.write(&[], &path).await.unwrap();

        assert_eq!(written, 0);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_unwritable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("recipes.csv");

        let result = CsvExporter.write(&[record(1, Vec::new())], &path).await;

        assert!(matches!(result, Err(ScrapeError::IoError(_))));
    }
}
