use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for the frontend
    let mut types = Vec::new();

    // Contact types
    types.push(clean_type(Contact::export_to_string()?));

    // Deduplication types
    types.push(clean_type(MatchCriterion::export_to_string()?));
    types.push(clean_type(DeduplicationResult::export_to_string()?));

    // Import wizard types
    types.push(clean_type(ContactField::export_to_string()?));
    types.push(clean_type(InvalidRow::export_to_string()?));
    types.push(clean_type(ImportReport::export_to_string()?));

    let output_dir = Path::new("../lib/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            // Drop the per-type generated banner and cross-file imports;
            // everything lands in a single types.ts.
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
                && !trimmed.starts_with("import type")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
