use crate::output::FileReport;

pub fn print(reports: &[FileReport]) {
    let width = reports
        .iter()
        .map(|r| r.path.display().to_string().chars().count())
        .max()
        .unwrap_or(10);

    for report in reports {
        let path = report.path.display().to_string();
        match &report.outcome {
            Ok(result) => {
                let status = if result.valid { "VALID" } else { "INVALID" };
                println!("  {:<width$}  {:<7}  {}", path, status, result.reason);
            }
            Err(error) => {
                println!("  {:<width$}  {:<7}  {}", path, "ERROR", error);
            }
        }
    }

    let valid = reports
        .iter()
        .filter(|r| matches!(r.outcome, Ok(ref v) if v.valid))
        .count();
    let failed = reports.iter().filter(|r| r.outcome.is_err()).count();
    println!(
        "\n  {} file(s): {} valid, {} invalid, {} error(s)",
        reports.len(),
        valid,
        reports.len() - valid - failed,
        failed
    );
}
