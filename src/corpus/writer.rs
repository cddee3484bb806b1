use std::{
    borrow::Cow,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::{Context, Result};

use super::TrainingExample;

const CSV_HEADER: [&str; 2] = ["input", "output"];

/// Writes both corpus files. The JSONL file is written first; if it fails the
/// CSV file is left untouched.
pub fn persist(examples: &[TrainingExample], jsonl_path: &Path, csv_path: &Path) -> Result<()> {
    write_jsonl(examples, jsonl_path)?;
    write_csv(examples, csv_path)?;
    Ok(())
}

pub fn write_jsonl(examples: &[TrainingExample], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    for example in examples {
        serde_json::to_writer(&mut out, example)
            .with_context(|| format!("serializing record for {}", path.display()))?;
        out.write_all(b"\n")?;
    }

    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn write_csv(examples: &[TrainingExample], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);

    write_row(&mut out, &CSV_HEADER)?;
    for example in examples {
        write_row(&mut out, &[example.input.as_str(), example.output.as_str()])?;
    }

    out.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| quote_field(f))
        .collect::<Vec<_>>()
        .join(",");
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// Minimal quoting: only fields holding a delimiter, quote or line break are
/// wrapped, with inner quotes doubled.
fn quote_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
