pub mod mongo;

pub mod jwt;

pub mod notify;
