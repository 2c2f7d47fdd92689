pub mod like_counter_postgres;

pub use like_counter_postgres::LikeCounterPostgres;
