#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use logtally::analyzer::{evaluate, GateOutcome, ERROR_THRESHOLD};
    use logtally::formatters::{render_report, render_summary, write_report, Writer};
    use logtally::models::{Level, LevelCounts, Report, SummaryFormat, LUCKY_NUMBER_COUNT};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::Path;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 5, 7)
            .unwrap()
    }

    fn counts(errors: u64, warnings: u64, infos: u64) -> LevelCounts {
        let mut counts = LevelCounts::new();
        for (level, n) in [(Level::Error, errors), (Level::Warning, warnings), (Level::Info, infos)] {
            for _ in 0..n {
                counts.increment(level);
            }
        }
        counts
    }

    fn sample_report(c: LevelCounts) -> Report {
        Report::new(Path::new("log.txt"), c, fixed_time(), &mut StdRng::seed_from_u64(11))
    }

    fn number_line(rendered: &str) -> String {
        let lines: Vec<&str> = rendered.lines().collect();
        let idx = lines.iter().position(|l| *l == "🎲 NUMÉROS GÉNÉRÉS ALÉATOIREMENT:").unwrap();
        lines[idx + 1].to_string()
    }

    #[test]
    fn test_report_total_and_numbers() {
        let report = sample_report(counts(2, 3, 4));
        assert_eq!(report.total, 9);
        assert_eq!(report.lucky_numbers.len(), LUCKY_NUMBER_COUNT);
        assert!(report.lucky_numbers.iter().all(|n| (1..=100).contains(n)));
    }

    #[test]
    fn test_render_report_layout() {
        let rendered = render_report(&sample_report(counts(2, 3, 4)));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines[0], "=== RAPPORT D'ANALYSE DES LOGS ===");
        assert_eq!(lines[1], "Généré le         : 2026-10-16 09:05:07");
        assert_eq!(lines[2], "Fichier analysé   : log.txt");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], "📊 STATISTIQUES:");
        assert_eq!(lines[5], "- Erreurs (ERROR)       : 2");
        assert_eq!(lines[6], "- Avertissements (WARNING): 3");
        assert_eq!(lines[7], "- Informations (INFO)   : 4");
        assert_eq!(lines[8], "- Total des entrées     : 9");
        assert_eq!(lines[9], "");
        assert_eq!(lines[10], "🎲 NUMÉROS GÉNÉRÉS ALÉATOIREMENT:");
        assert_eq!(lines[12], "");
        assert_eq!(lines.len(), 14);
        assert_eq!(lines.last(), Some(&"=== FIN DU RAPPORT ==="));
        assert!(!rendered.ends_with('\n'));
    }

    #[test]
    fn test_report_always_has_ten_numbers() {
        for c in [counts(0, 0, 0), counts(50, 1, 0)] {
            let line = number_line(&render_report(&sample_report(c)));
            let numbers: Vec<u32> = line.split(", ").map(|n| n.parse().unwrap()).collect();
            assert_eq!(numbers.len(), 10);
            assert!(numbers.iter().all(|n| (1..=100).contains(n)));
        }
    }

    #[test]
    fn test_write_report_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rapport.txt");
        std::fs::write(&path, "stale report").unwrap();

        let report = sample_report(counts(1, 0, 0));
        write_report(&path, &report).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(!written.contains("stale"));
        assert_eq!(written, render_report(&report));
        assert!(written.ends_with("=== FIN DU RAPPORT ==="));
    }

    #[test]
    fn test_writer_separates_file_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lines.txt");

        let mut writer = Writer::from_file(std::fs::File::create(&path).unwrap());
        for line in ["first", "", "last"] {
            writer.write(line).unwrap();
        }
        writer.flush().unwrap();
        assert_eq!(writer.lines_written, 3);
        drop(writer);

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\n\nlast");
    }

    #[test]
    fn test_render_summary_formats() {
        let report = sample_report(counts(1, 2, 1234));

        let plain = render_summary(&report, SummaryFormat::Plain).unwrap();
        assert_eq!(plain, "ERROR: 1\nWARNING: 2\nINFO: 1234\nTOTAL: 1237");

        let table = render_summary(&report, SummaryFormat::Table).unwrap();
        assert!(table.contains("Level"));
        assert!(table.contains("1,234"));
        assert!(table.contains("TOTAL"));

        let json = render_summary(&report, SummaryFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["file"], "log.txt");
        assert_eq!(value["counts"]["ERROR"], 1);
        assert_eq!(value["counts"]["WARNING"], 2);
        assert_eq!(value["counts"]["INFO"], 1234);
        assert_eq!(value["total"], 1237);
    }

    #[test]
    fn test_threshold_gate() {
        assert_eq!(ERROR_THRESHOLD, 5);
        assert_eq!(evaluate(&counts(0, 0, 0)), GateOutcome::Passed);
        assert_eq!(evaluate(&counts(5, 10, 10)), GateOutcome::Passed);
        assert_eq!(
            evaluate(&counts(6, 0, 0)),
            GateOutcome::Exceeded {
                errors: 6,
                threshold: 5
            }
        );
    }
}
