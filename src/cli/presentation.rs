//! CLI presentation: human-readable run summary.

use crate::manifest::BuildReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use std::path::Path;

/// Summary printed after a manifest is written: one row per core plus totals.
pub fn format_build_summary(report: &BuildReport, output: &Path) -> String {
    let manifest = &report.manifest;
    let mut out = format!(
        "Wrote {} (v{}, db_id {})\n\n",
        output.display(),
        manifest.v,
        manifest.db_id
    );

    if report.cores.is_empty() {
        out.push_str("No cores found.");
        return out;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Core", "Files", "Folders", "Bytes"]);
    for core in &report.cores {
        table.add_row(vec![
            core.name.clone(),
            core.files.to_string(),
            core.folders.to_string(),
            core.bytes.to_string(),
        ]);
    }
    table.add_row(vec![
        "Total".to_string(),
        report.total_files().to_string(),
        report.total_folders().to_string(),
        report.total_bytes().to_string(),
    ]);
    out.push_str(&table.to_string());
    out
}
