use std::sync::OnceLock;

use log::debug;
use regex::Regex;

use super::models::{PrinterOptionSet, QueueEntry};

/// Leading character `lpoptions -l` puts in front of the current value.
const DEFAULT_MARKER: char = '*';

fn column_separator() -> &'static Regex {
    static COLUMN_SEPARATOR: OnceLock<Regex> = OnceLock::new();
    // Fields may contain single spaces (the date does), columns are two or more apart.
    COLUMN_SEPARATOR.get_or_init(|| Regex::new(r"\s{2,}").expect("valid regex"))
}

fn request_id_pattern() -> &'static Regex {
    static REQUEST_ID: OnceLock<Regex> = OnceLock::new();
    REQUEST_ID.get_or_init(|| Regex::new(r"^(.+)-([0-9]+)$").expect("valid regex"))
}

fn submission_pattern() -> &'static Regex {
    static SUBMISSION: OnceLock<Regex> = OnceLock::new();
    // e.g. "request id is epson-et-16650-9037 (1 file(s))\n"
    SUBMISSION.get_or_init(|| Regex::new(r"(\S*-[0-9]+) \(.*\)\n$").expect("valid regex"))
}

/// Parse `lpstat -W ...` output into queue entries.
///
/// Only rows with exactly four columns whose first column looks like
/// `<printer>-<job id>` are kept; everything else (headers, wrapped lines,
/// warnings) is dropped. Order is preserved.
pub fn parse_queue(raw: &str) -> Vec<QueueEntry> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let columns: Vec<&str> = column_separator().split(line).collect();
            let [request_id, user, size, date] = columns[..] else {
                debug!("Skipping queue line with {} columns: {:?}", columns.len(), line);
                return None;
            };

            let Some(captures) = request_id_pattern().captures(request_id) else {
                debug!("Skipping queue line with unexpected request id: {:?}", request_id);
                return None;
            };

            Some(QueueEntry {
                request_id: request_id.to_string(),
                printer_name: captures[1].to_string(),
                job_id: captures[2].to_string(),
                user: user.to_string(),
                size: size.to_string(),
                date: date.to_string(),
            })
        })
        .collect()
}

/// Parse `lpstat -p` output: the printer name is the second space-separated
/// token of each line (`printer <name> is idle.  enabled since ...`).
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.lines()
        .filter_map(|line| line.split(' ').nth(1))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse `lpoptions -p <printer> -l` output.
///
/// Each line reads `Name/Human readable: value *default value`. Only the name
/// before the first `/` is kept. If more than one value carries the default
/// marker, the last one wins.
pub fn parse_options(raw: &str) -> Vec<PrinterOptionSet> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let (names, list) = line.split_once(": ")?;
            if names.is_empty() || list.is_empty() {
                return None;
            }
            let name = names.split('/').next().unwrap_or(names);

            let mut default_value = None;
            let values = list
                .split(' ')
                .filter(|value| !value.is_empty())
                .map(|value| match value.strip_prefix(DEFAULT_MARKER) {
                    Some(stripped) => {
                        default_value = Some(stripped.to_string());
                        stripped.to_string()
                    }
                    None => value.to_string(),
                })
                .collect();

            Some(PrinterOptionSet { name: name.to_string(), values, default_value })
        })
        .collect()
}

/// Pull the request id out of `lp`'s confirmation text, if it has the usual shape.
pub fn parse_submission(raw: &str) -> Option<String> {
    submission_pattern()
        .captures(raw)
        .map(|captures| captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_line_is_decomposed() {
        let entries = parse_queue("printerA-42  alice  1024  Mon 01 Jan 2024 10:00:00\n");
        assert_eq!(
            entries,
            vec![QueueEntry {
                request_id: "printerA-42".to_string(),
                printer_name: "printerA".to_string(),
                job_id: "42".to_string(),
                user: "alice".to_string(),
                size: "1024".to_string(),
                date: "Mon 01 Jan 2024 10:00:00".to_string(),
            }]
        );
    }

    #[test]
    fn queue_keeps_only_four_column_rows_in_order() {
        let raw = "\
epson-et-16650-9037     bob              1024   Tue 02 Jan 2024 09:15:00 AM CET
	queued for epson-et-16650
noise  with  three
a-1  b  c  d  e
office-7                alice            2048   Tue 02 Jan 2024 09:16:00 AM CET

";
        let entries = parse_queue(raw);
        let ids: Vec<&str> = entries.iter().map(|e| e.request_id.as_str()).collect();
        assert_eq!(ids, vec!["epson-et-16650-9037", "office-7"]);
        assert_eq!(entries[0].printer_name, "epson-et-16650");
        assert_eq!(entries[0].job_id, "9037");
        assert_eq!(entries[1].user, "alice");
    }

    #[test]
    fn queue_drops_rows_without_numeric_job_id() {
        let raw = "office  alice  2048  today\n-12  alice  2048  today\noffice-x1  alice  2048  today\n";
        assert!(parse_queue(raw).is_empty());
    }

    #[test]
    fn queue_job_id_must_be_ascii_digits() {
        assert!(parse_queue("office-\u{0663}\u{0664}  alice  1  now\n").is_empty());
    }

    #[test]
    fn queue_handles_crlf() {
        let entries = parse_queue("office-3  alice  1  now\r\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].date, "now");
    }

    #[test]
    fn printer_names_take_second_token() {
        let raw = "\
printer epson-et-16650 is idle.  enabled since Mon 01 Jan 2024
printer office disabled since Mon 01 Jan 2024 -

printer
";
        assert_eq!(parse_names(raw), vec!["epson-et-16650", "office"]);
    }

    #[test]
    fn printer_names_keep_duplicates() {
        assert_eq!(parse_names("printer a is idle.\nprinter a is idle.\n"), vec!["a", "a"]);
    }

    #[test]
    fn option_line_with_alias_and_default() {
        assert_eq!(
            parse_options("PageSize/Page Size: *Letter A4 Legal\n"),
            vec![PrinterOptionSet {
                name: "PageSize".to_string(),
                values: vec!["Letter".to_string(), "A4".to_string(), "Legal".to_string()],
                default_value: Some("Letter".to_string()),
            }]
        );
    }

    #[test]
    fn option_without_default_or_alias() {
        let options = parse_options("Duplex: None DuplexNoTumble DuplexTumble\n");
        assert_eq!(options[0].name, "Duplex");
        assert_eq!(options[0].values.len(), 3);
        assert_eq!(options[0].default_value, None);
    }

    #[test]
    fn option_lines_without_separator_are_skipped() {
        let raw = "garbage line\nColorModel/Color Mode:\nInputSlot/Media Source: Auto *Manual\n";
        let options = parse_options(raw);
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].name, "InputSlot");
        assert_eq!(options[0].default_value.as_deref(), Some("Manual"));
    }

    #[test]
    fn last_default_marker_wins() {
        let options = parse_options("Resolution/Output Resolution: *300dpi 600dpi *1200dpi\n");
        assert_eq!(options[0].values, vec!["300dpi", "600dpi", "1200dpi"]);
        assert_eq!(options[0].default_value.as_deref(), Some("1200dpi"));
    }

    #[test]
    fn submission_request_id() {
        assert_eq!(
            parse_submission("request id is epson-et-16650-9037 (1 file(s))\n").as_deref(),
            Some("epson-et-16650-9037")
        );
    }

    #[test]
    fn submission_without_expected_shape() {
        assert_eq!(parse_submission("request id is epson-et-16650-9037 (1 file(s))"), None);
        assert_eq!(parse_submission("lp: Error - no default destination available.\n"), None);
        assert_eq!(parse_submission(""), None);
        assert_eq!(parse_submission("request id is office-\u{0663}\u{0664} (1 file(s))\n"), None);
    }

    #[test]
    fn submission_after_warning_lines() {
        let raw = "lp: warning - printer is paused\nrequest id is office-12 (1 file(s))\n";
        assert_eq!(parse_submission(raw).as_deref(), Some("office-12"));
    }
}
