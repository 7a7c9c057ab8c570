pub mod db;
pub mod entities;
pub mod repos;
