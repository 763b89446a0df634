pub mod db;
pub mod fixtures;
pub mod memory;
pub mod qr;
pub mod time;

pub use db::repositories::DieselItemRepository;
pub use memory::InMemoryItemRepository;
pub use qr::{QrCodeEncoder, QrImageRenderer};
pub use time::SystemClock;
