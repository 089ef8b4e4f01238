use anyhow::Result;
use comfy_table::{ContentArrangement, Table};
use serde::Serialize;
use thousands::Separable;

use super::Writer;
use crate::models::{LevelCounts, Report, SummaryFormat};

#[derive(Serialize)]
struct JsonSummary<'a> {
    file: String,
    counts: &'a LevelCounts,
    total: u64,
}

pub fn render_summary(report: &Report, format: SummaryFormat) -> Result<String> {
    let rendered = match format {
        SummaryFormat::Plain => {
            let mut lines: Vec<String> = report
                .counts
                .iter()
                .map(|(level, count)| format!("{}: {}", level, count))
                .collect();
            lines.push(format!("TOTAL: {}", report.total));
            lines.join("\n")
        }
        SummaryFormat::Table => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["Level", "Count"]);

            for (level, count) in report.counts.iter() {
                table.add_row(vec![level.to_string(), count.separate_with_commas()]);
            }
            table.add_row(vec!["TOTAL".to_string(), report.total.separate_with_commas()]);

            table.to_string()
        }
        SummaryFormat::Json => serde_json::to_string_pretty(&JsonSummary {
            file: report.source.to_string_lossy().to_string(),
            counts: &report.counts,
            total: report.total,
        })?,
    };

    Ok(rendered)
}

pub fn display_summary(report: &Report, format: SummaryFormat) -> Result<()> {
    let mut writer = Writer::stdout();
    writer.write(&render_summary(report, format)?)
}
