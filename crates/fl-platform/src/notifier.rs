use fl_core::ports::{Notice, NoticeLevel, NotifierPort};
use tracing::{error, info, warn};

/// Shows notices on stderr and mirrors them into the log.
#[derive(Default)]
pub struct ConsoleNotifier;

impl ConsoleNotifier {
    pub fn format(notice: &Notice) -> String {
        let tag = match notice.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        format!("[{tag}] {}: {}", notice.title, notice.message)
    }
}

impl NotifierPort for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match notice.level {
            NoticeLevel::Success | NoticeLevel::Info => {
                info!(title = %notice.title, message = %notice.message, "notice")
            }
            NoticeLevel::Warning => {
                warn!(title = %notice.title, message = %notice.message, "notice")
            }
            NoticeLevel::Error => {
                error!(title = %notice.title, message = %notice.message, "notice")
            }
        }
        eprintln!("{}", Self::format(&notice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        let notice = Notice::new(NoticeLevel::Warning, "No variants selected", "Pick one");
        assert_eq!(
            ConsoleNotifier::format(&notice),
            "[warning] No variants selected: Pick one"
        );
    }
}
