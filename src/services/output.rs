use crate::domain::models::{JsonOut, VerifyReport};
use crate::services::report::render_text;

pub fn print_report(json: bool, report: &VerifyReport) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut {
                ok: report.overall == "ok",
                data: report
            })?
        );
    } else {
        print!("{}", render_text(report));
    }
    Ok(())
}
