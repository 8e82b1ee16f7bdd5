pub mod zones;

pub use zones::{UploadReceipt, UploadZoneUseCase};
