//! Services
//!
//! Business logic over the repositories. Each service is built from the
//! shared `Surreal<Db>` handle and returns API models with `AppError`.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod mailer;
pub mod order_placement;
pub mod seed;

pub use admin::AdminService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use mailer::{LogMailer, MailError, Mailer, RecordingMailer, SentMail, WebhookMailer};
pub use order_placement::OrderPlacementService;
pub use seed::SeedService;
