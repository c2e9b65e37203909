pub mod games_sea;
pub mod sqlite_file;
