pub mod favorite_repository;

pub use favorite_repository::PostgresFavoriteRepository;
