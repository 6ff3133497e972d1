use std::io::Error;
use std::path::{Path, PathBuf};

#[allow(dead_code)]
/// Writes a `name,amount` CSV into `dir` and returns its path.
pub fn write_participants(dir: &Path, file: &str, rows: &[(&str, &str)]) -> Result<PathBuf, Error> {
    let path = dir.join(file);
    let mut wtr = csv::Writer::from_path(&path)?;

    wtr.write_record(["name", "amount"])?;
    for (name, amount) in rows {
        wtr.write_record([name, amount])?;
    }

    wtr.flush()?;
    Ok(path)
}

#[allow(dead_code)]
/// One payer followed by `others` participants who paid nothing.
pub fn single_payer_rows(amount: &str, others: usize) -> Vec<(String, String)> {
    let mut rows = vec![("Payer".to_string(), amount.to_string())];
    for i in 1..=others {
        rows.push((format!("Friend{i}"), "0".to_string()));
    }
    rows
}
