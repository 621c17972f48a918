pub mod game_api;

pub use game_api::GameApiClient;
