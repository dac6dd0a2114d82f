pub mod jenkins_endpoint;
pub mod jenkins_model;
pub mod pwd_jenkins_async_client;
pub mod query;
pub mod util;
