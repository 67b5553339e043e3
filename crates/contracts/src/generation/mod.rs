pub mod request;
pub mod response;

pub use request::GenerateProjectRequest;
pub use response::GenerateProjectResponse;
