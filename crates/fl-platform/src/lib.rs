pub mod app_dirs;
pub mod notifier;
pub mod print;
pub mod sink;

pub use app_dirs::{AppDirs, AppDirsError, DirsAppDirsAdapter};
pub use notifier::ConsoleNotifier;
pub use print::HtmlFilePrintSurface;
pub use sink::FsLabelSink;
