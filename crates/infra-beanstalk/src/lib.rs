// beanschk Infrastructure - beanstalkd Adapter
// Implements: Connector, QueueServer over the beanstalkd text protocol

pub mod connection;
pub mod error;
pub mod protocol;

pub use connection::{BeanstalkConnection, BeanstalkConnector};
pub use error::BeanstalkError;
