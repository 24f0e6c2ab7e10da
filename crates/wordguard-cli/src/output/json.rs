use serde_json::json;
use wordguard_core::error::WordguardError;

use crate::output::FileReport;

pub fn print(reports: &[FileReport]) -> Result<(), WordguardError> {
    let entries: Vec<serde_json::Value> = reports
        .iter()
        .map(|r| match &r.outcome {
            Ok(result) => json!({
                "path": r.path.display().to_string(),
                "valid": result.valid,
                "reason": result.reason,
            }),
            Err(error) => json!({
                "path": r.path.display().to_string(),
                "error": error,
            }),
        })
        .collect();
    let json = serde_json::to_string_pretty(&entries)?;
    println!("{json}");
    Ok(())
}
