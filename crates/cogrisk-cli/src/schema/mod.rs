pub mod model_file;
pub mod request;
