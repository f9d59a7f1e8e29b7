//! `classify` subcommand — report the notation of each input without converting.

use super::{ClassifyJson, ClassifyOutput, Result, color, kv, print_json};

pub(super) fn cmd_classify(inputs: &[String], json: bool) -> Result<()> {
    let results: Vec<ClassifyJson> = inputs
        .iter()
        .map(|raw| ClassifyJson {
            input: raw.clone(),
            format: color::classify(raw),
        })
        .collect();

    if json {
        return print_json(&ClassifyOutput {
            count: results.len(),
            results,
        });
    }

    let labels: Vec<String> = results.iter().map(|r| format!("{:?}", r.input)).collect();
    let w = labels.iter().map(|l| l.len()).max().unwrap_or(0) + 2;
    for (label, result) in labels.iter().zip(&results) {
        kv(label, result.format, w);
    }
    Ok(())
}
