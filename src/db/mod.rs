pub mod mongo;
pub mod seed;
