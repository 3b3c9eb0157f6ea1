use super::catalog::ChecklistCatalog;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct CatalogRow<'a> {
    key: &'a str,
    category: &'a str,
    description: &'a str,
    localized_description: &'a str,
}

/// Writes the catalog as CSV with a header row, one control per line.
pub fn write_catalog_csv<W: Write>(writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for item in ChecklistCatalog::standard().items() {
        csv_writer.serialize(CatalogRow {
            key: item.key.as_str(),
            category: item.category.code(),
            description: item.description,
            localized_description: item.localized_description,
        })?;
    }
    csv_writer.flush()?;
    Ok(())
}
