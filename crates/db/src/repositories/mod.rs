//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Content repositories only ever
//! read active rows; lifecycle columns belong to [`LifecycleRepo`] and
//! [`TrashRepo`].

pub mod article_repo;
pub mod content_repo;
pub mod episode_repo;
pub mod event_repo;
pub mod lifecycle_repo;
pub mod resource_repo;
pub mod show_repo;
pub mod trash_repo;
pub mod user_repo;

pub use article_repo::ArticleRepo;
pub use content_repo::ContentRepo;
pub use episode_repo::EpisodeRepo;
pub use event_repo::EventRepo;
pub use lifecycle_repo::LifecycleRepo;
pub use resource_repo::ResourceRepo;
pub use show_repo::ShowRepo;
pub use trash_repo::TrashRepo;
pub use user_repo::UserRepo;
