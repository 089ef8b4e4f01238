use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

use super::Writer;
use crate::models::{Level, Report};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn stat_label(level: Level) -> &'static str {
    match level {
        Level::Error => "- Erreurs (ERROR)       : ",
        Level::Warning => "- Avertissements (WARNING): ",
        Level::Info => "- Informations (INFO)   : ",
    }
}

pub fn render_report_lines(report: &Report) -> Vec<String> {
    let mut lines = vec![
        "=== RAPPORT D'ANALYSE DES LOGS ===".to_string(),
        format!(
            "Généré le         : {}",
            report.generated_at.format(TIMESTAMP_FORMAT)
        ),
        format!("Fichier analysé   : {}", report.source.display()),
        String::new(),
        "📊 STATISTIQUES:".to_string(),
    ];

    for level in Level::ALL {
        lines.push(format!("{}{}", stat_label(level), report.counts.get(level)));
    }
    lines.push(format!("- Total des entrées     : {}", report.total));

    lines.push(String::new());
    lines.push("🎲 NUMÉROS GÉNÉRÉS ALÉATOIREMENT:".to_string());
    lines.push(
        report
            .lucky_numbers
            .iter()
            .map(|n| n.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    );
    lines.push(String::new());
    lines.push("=== FIN DU RAPPORT ===".to_string());

    lines
}

pub fn render_report(report: &Report) -> String {
    render_report_lines(report).join("\n")
}

/// Replaces `path` with the rendered report. The content goes to a temp file
/// next to the destination first and is renamed into place.
pub fn write_report(path: &Path, report: &Report) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp_file = tempfile::NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create a temporary report in {}", dir.display()))?;

    let mut writer = Writer::from_file(temp_file.reopen()?);
    for line in render_report_lines(report) {
        writer.write(&line)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), lines = writer.lines_written, "report rendered");
    drop(writer);

    temp_file
        .persist(path)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;
    Ok(())
}
