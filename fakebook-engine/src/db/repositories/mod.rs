mod education_repository;
mod event_repository;
mod friend_repository;
mod location_repository;
mod photo_repository;
mod user_repository;

pub use education_repository::EducationRepository;
pub use event_repository::EventRepository;
pub use friend_repository::FriendRepository;
pub use location_repository::LocationRepository;
pub use photo_repository::PhotoRepository;
pub use user_repository::UserRepository;
