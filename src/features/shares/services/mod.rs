mod share_service;
mod share_store;

pub use share_service::ShareService;
pub use share_store::ShareStore;
