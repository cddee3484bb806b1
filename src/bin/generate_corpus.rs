use std::path::Path;

use anyhow::Result;
use english_tutor::corpus::{self, CSV_FILE, JSONL_FILE};

fn main() -> Result<()> {
    let examples = corpus::generate_examples();
    corpus::persist(&examples, Path::new(JSONL_FILE), Path::new(CSV_FILE))?;

    println!("Generated {} training examples", examples.len());
    println!("Files saved: {JSONL_FILE}, {CSV_FILE}");
    Ok(())
}
