//! Services backing the dashboard pages

pub mod auth;
pub mod catalog;
pub mod notification;
pub mod session;
pub mod storage;

pub use auth::{AuthBackend, MockAuthService};
pub use catalog::CatalogService;
pub use notification::{NotificationService, Toast, ToastVariant};
pub use session::{SessionPhase, SessionSnapshot, SessionStore};
pub use storage::{FileStorage, LocalStorage, MemoryStorage};
