use super::models::{PrintParams, QueueFilter};

/// `lpstat` arguments for listing the queue, optionally limited to some printers.
pub fn build_queue_args(filter: QueueFilter, printers: &[String]) -> Vec<String> {
    let mut args = vec!["-W".to_string(), filter.as_arg().to_string()];
    if !printers.is_empty() {
        args.push("-d".to_string());
        args.push(printers.join(","));
    }
    args
}

pub fn build_options_args(printer: &str) -> Vec<String> {
    vec!["-p".to_string(), printer.to_string(), "-l".to_string()]
}

/// `lp` arguments for a job, always in the order `-d -n -q -P -o...`.
///
/// Unset fields emit nothing, and neither do an empty printer name, a zero
/// priority or an empty page range. Printer options keep the caller's order.
pub fn build_print_args(params: &PrintParams) -> Vec<String> {
    let mut args = Vec::new();

    if let Some(printer) = params.printer.as_deref().filter(|p| !p.is_empty()) {
        args.extend(["-d".to_string(), printer.to_string()]);
    }
    if let Some(copies) = params.copies {
        args.extend(["-n".to_string(), copies.to_string()]);
    }
    if let Some(priority) = params.priority.filter(|q| *q != 0) {
        args.extend(["-q".to_string(), priority.to_string()]);
    }
    if let Some(pages) = params.pages.as_deref().filter(|p| !p.is_empty()) {
        args.extend(["-P".to_string(), pages.to_string()]);
    }
    for (key, value) in &params.printer_options {
        args.extend(["-o".to_string(), format!("{key}={value}")]);
    }

    args
}

/// `cancel` arguments for cancelling every job, scoped to `printer` when given.
pub fn build_cancel_args(printer: Option<&str>) -> Vec<String> {
    match printer {
        Some(printer) => vec!["-a".to_string(), printer.to_string()],
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use super::*;

    #[test]
    fn print_args_in_fixed_order() {
        let params = PrintParams {
            printer: Some("p1".to_string()),
            copies: NonZeroU32::new(2),
            printer_options: [("sides".to_string(), "two-sided-long-edge".to_string())].into(),
            ..Default::default()
        };
        assert_eq!(build_print_args(&params), vec!["-d", "p1", "-n", "2", "-o", "sides=two-sided-long-edge"]);
    }

    #[test]
    fn print_args_with_every_field() {
        let params = PrintParams {
            printer: Some("office".to_string()),
            copies: NonZeroU32::new(3),
            priority: Some(80),
            pages: Some("1-3,7".to_string()),
            printer_options: [
                ("sides".to_string(), "one-sided".to_string()),
                ("media".to_string(), "A4".to_string()),
            ]
            .into(),
        };
        assert_eq!(
            build_print_args(&params),
            vec!["-d", "office", "-n", "3", "-q", "80", "-P", "1-3,7", "-o", "sides=one-sided", "-o", "media=A4"]
        );
    }

    #[test]
    fn empty_params_emit_nothing() {
        assert!(build_print_args(&PrintParams::default()).is_empty());

        let params = PrintParams {
            printer: Some(String::new()),
            priority: Some(0),
            pages: Some(String::new()),
            ..Default::default()
        };
        assert!(build_print_args(&params).is_empty());
    }

    #[test]
    fn printer_options_keep_given_order() {
        let params = PrintParams {
            printer_options: vec![
                ("sides".to_string(), "two-sided-long-edge".to_string()),
                ("Duplex".to_string(), "None".to_string()),
            ],
            ..Default::default()
        };
        assert_eq!(build_print_args(&params), vec!["-o", "sides=two-sided-long-edge", "-o", "Duplex=None"]);
    }

    #[test]
    fn negative_priority_is_passed_through() {
        let params = PrintParams { priority: Some(-5), ..Default::default() };
        assert_eq!(build_print_args(&params), vec!["-q", "-5"]);
    }

    #[test]
    fn queue_args() {
        assert_eq!(build_queue_args(QueueFilter::NotCompleted, &[]), vec!["-W", "not-completed"]);
        assert_eq!(
            build_queue_args(QueueFilter::Completed, &["a".to_string(), "b".to_string()]),
            vec!["-W", "completed", "-d", "a,b"]
        );
    }

    #[test]
    fn cancel_args() {
        assert_eq!(build_cancel_args(Some("office")), vec!["-a", "office"]);
        assert!(build_cancel_args(None).is_empty());
    }

    #[test]
    fn options_args() {
        assert_eq!(build_options_args("office"), vec!["-p", "office", "-l"]);
    }
}
