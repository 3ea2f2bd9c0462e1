pub mod mongo;
pub mod response;
