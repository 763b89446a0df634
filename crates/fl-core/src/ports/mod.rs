//! Port interfaces for the application layer
//!
//! Ports define the contract between the label workflow (use cases) and the
//! collaborators it drives: the item backend, the QR encoder and image
//! renderer, the print surface, the download sink and the notifier.

mod clock;
pub mod errors;
mod item_repository;
mod label_renderer;
mod label_sink;
mod notifier;
mod print_surface;
mod qr_encoder;

pub use clock::ClockPort;
pub use errors::{
    EncodingError, ItemRepositoryError, LabelSinkError, PrintSurfaceError, RenderError,
};
pub use item_repository::{ItemRepositoryPort, PayloadAssignment, PersistOutcome};
pub use label_renderer::LabelRendererPort;
pub use label_sink::LabelSinkPort;
pub use notifier::{Notice, NoticeLevel, NotifierPort};
pub use print_surface::{PrintSurface, PrintSurfacePort};
pub use qr_encoder::QrEncoderPort;
