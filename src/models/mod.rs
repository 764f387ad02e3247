pub mod config;
pub mod customer;
pub mod invoice;
