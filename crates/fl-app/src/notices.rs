//! User-facing notices for every action outcome.

use fl_core::ports::{Notice, NoticeLevel};
use fl_core::{ActionKind, LabelActionError};

use crate::usecases::{DownloadReport, GenerationReport, PrintReport};

pub fn generation_notice(report: &GenerationReport) -> Notice {
    if report.nothing_to_generate() {
        return Notice::new(
            NoticeLevel::Info,
            "QR codes up to date",
            format!(
                "All {} selected items already have QR codes",
                report.requested
            ),
        );
    }

    let generated = report.generated.len();
    let failed = report.failure_count();
    if failed == 0 {
        Notice::new(
            NoticeLevel::Success,
            "QR codes generated",
            format!("Generated {generated} QR codes"),
        )
    } else if generated == 0 {
        Notice::new(
            NoticeLevel::Error,
            "QR code generation failed",
            format!("None of the {failed} QR codes could be generated"),
        )
    } else {
        Notice::new(
            NoticeLevel::Warning,
            "QR codes partially generated",
            format!("Generated {generated}, {failed} failed"),
        )
    }
}

pub fn print_notice(report: &PrintReport) -> Notice {
    let printed = report.printed.len();
    let mut message = format!(
        "Sent {printed} labels for {} variants to print",
        report.variant_count
    );
    if !report.skipped.is_empty() {
        message.push_str(&format!(
            "; {} labels could not be rendered",
            report.skipped.len()
        ));
    }
    if report.mark_error.is_some() {
        message.push_str("; the printed state could not be saved");
    }

    let level = if report.is_clean() {
        NoticeLevel::Success
    } else {
        NoticeLevel::Warning
    };
    Notice::new(level, "Labels sent to print", message)
}

pub fn download_notice(report: &DownloadReport) -> Notice {
    let saved = report.saved.len();
    if report.failures.is_empty() {
        return Notice::new(
            NoticeLevel::Success,
            "Labels downloaded",
            format!("Saved {saved} label images"),
        );
    }
    let level = if saved == 0 {
        NoticeLevel::Error
    } else {
        NoticeLevel::Warning
    };
    Notice::new(
        level,
        "Labels partially downloaded",
        format!("Saved {saved}, {} failed", report.failures.len()),
    )
}

pub fn error_notice(action: ActionKind, error: &LabelActionError) -> Notice {
    match error {
        LabelActionError::EmptySelection => Notice::new(
            NoticeLevel::Warning,
            "No variants selected",
            "Select at least one variant first",
        ),
        LabelActionError::NoPayloadsToPrint => Notice::new(
            NoticeLevel::Warning,
            "No QR codes yet",
            "Generate QR codes for the selected variants before printing or downloading",
        ),
        LabelActionError::NothingRendered => Notice::new(
            NoticeLevel::Error,
            "Labels could not be rendered",
            "None of the selected QR codes could be turned into a label image",
        ),
        LabelActionError::PrintSurfaceUnavailable(reason) => Notice::new(
            NoticeLevel::Error,
            "Print window blocked",
            format!(
                "Could not open the print window ({reason}). Allow pop-ups for this app or check the output location"
            ),
        ),
        LabelActionError::ActionInProgress(kind) => Notice::new(
            NoticeLevel::Info,
            "Please wait",
            format!("A {kind} action is already running"),
        ),
        LabelActionError::Repository(reason) => Notice::new(
            NoticeLevel::Error,
            format!("Could not {action} labels"),
            format!("The item store is unavailable: {reason}"),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fl_core::{FailureKind, ItemFailure, ItemId};

    #[test]
    fn test_generation_levels() {
        let noop = GenerationReport {
            requested: 2,
            already_encoded: 2,
            ..Default::default()
        };
        assert_eq!(generation_notice(&noop).level, NoticeLevel::Info);

        let mut report = GenerationReport {
            requested: 2,
            generated: vec![ItemId::from("1")],
            ..Default::default()
        };
        assert_eq!(generation_notice(&report).level, NoticeLevel::Success);

        report.encoding_failures.push(ItemFailure::new(
            ItemId::from("2"),
            FailureKind::EncodingFailure,
            "too long",
        ));
        let notice = generation_notice(&report);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "Generated 1, 1 failed");
    }

    #[test]
    fn test_print_with_skips_is_a_warning() {
        let report = PrintReport {
            printed: vec![ItemId::from("1")],
            skipped: vec![ItemFailure::new(
                ItemId::from("2"),
                FailureKind::RenderFailure,
                "bad",
            )],
            variant_count: 1,
            ..Default::default()
        };
        let notice = print_notice(&report);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert!(notice.message.contains("1 labels could not be rendered"));
    }

    #[test]
    fn test_surface_error_tells_user_to_allow_popups() {
        let notice = error_notice(
            ActionKind::Print,
            &LabelActionError::PrintSurfaceUnavailable("blocked".into()),
        );
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.contains("Allow pop-ups"));
    }
}
