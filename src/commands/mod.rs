pub mod send;

pub use send::execute_send;
