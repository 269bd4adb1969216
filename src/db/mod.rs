pub mod mongo;

pub use mongo::Db;
