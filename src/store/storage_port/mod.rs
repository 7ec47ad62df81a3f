pub mod export_csv;
pub mod export_json;

use super::*;
use clap::ValueEnum;
use std::path::PathBuf;

pub use export_csv::export_contacts_to_csv;
pub use export_json::export_contacts_to_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

pub fn export_contacts(
    book: &AddressBook,
    format: ExportFormat,
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    match format {
        ExportFormat::Json => export_contacts_to_json(book, des),
        ExportFormat::Csv => export_contacts_to_csv(book, des),
    }
}

/// Resolves the export destination: a directory gets the default file name,
/// a file must carry the extension of the chosen format.
fn resolve_destination(
    des: Option<&str>,
    default_path: &str,
    extension: &str,
) -> Result<PathBuf, AppError> {
    let mut file_path = PathBuf::from(default_path);

    if let Some(path) = des
        && !path.is_empty()
    {
        file_path = PathBuf::from(path);

        if file_path.is_dir() {
            let file_name = Path::new(default_path)
                .file_name()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(format!("addressbook.{extension}")));
            file_path = file_path.join(file_name);
        } else if file_path.extension().is_none_or(|ext| ext != extension) {
            return Err(AppError::Validation(format!(
                "Export file must be a .{extension} file"
            )));
        }
    }

    create_file_parent(&file_path)?;
    Ok(file_path)
}
