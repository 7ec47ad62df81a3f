use super::*;
use csv::Writer;
use serde::Serialize;

const EXPORT_PATH: &str = "./export/addressbook.csv";

/// One row per phone number; people without phones still get a row.
#[derive(Serialize)]
struct CsvRow<'a> {
    id: usize,
    name: &'a str,
    email: &'a str,
    number: &'a str,
    #[serde(rename = "type")]
    kind: String,
}

pub fn export_contacts_to_csv(
    book: &AddressBook,
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let file_path = resolve_destination(des, EXPORT_PATH, ExportFormat::Csv.extension())?;

    let mut writer = Writer::from_path(&file_path)?;

    let mut counter: u64 = 0;

    for (id, person) in book.list() {
        if person.phones.is_empty() {
            writer.serialize(CsvRow {
                id,
                name: &person.name,
                email: &person.email,
                number: "",
                kind: String::new(),
            })?;
        }

        for phone in &person.phones {
            writer.serialize(CsvRow {
                id,
                name: &person.name,
                email: &person.email,
                number: &phone.number,
                kind: phone.kind.to_string(),
            })?;
        }
        counter += 1;
    }

    writer.flush()?;

    Ok((file_path, counter))
}
