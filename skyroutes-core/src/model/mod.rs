pub mod airport;
pub mod network;
pub mod unit;
