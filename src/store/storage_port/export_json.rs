use super::*;
use crate::domain::contact::PhoneNumber;
use serde::Serialize;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};

const EXPORT_PATH: &str = "./export/addressbook.json";

#[derive(Serialize)]
struct JsonContact<'a> {
    id: usize,
    name: &'a str,
    email: &'a str,
    phones: &'a [PhoneNumber],
}

pub fn export_contacts_to_json(
    book: &AddressBook,
    des: Option<&str>,
) -> Result<(PathBuf, u64), AppError> {
    let file_path = resolve_destination(des, EXPORT_PATH, ExportFormat::Json.extension())?;

    let contacts: Vec<JsonContact> = book
        .list()
        .map(|(id, person)| JsonContact {
            id,
            name: &person.name,
            email: &person.email,
            phones: &person.phones,
        })
        .collect();

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&file_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, &contacts)?;
    writer.flush()?;

    Ok((file_path, contacts.len() as u64))
}
