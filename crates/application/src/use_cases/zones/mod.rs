pub mod upload_zone;

pub use upload_zone::{UploadReceipt, UploadZoneUseCase};
