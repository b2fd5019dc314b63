pub mod request;
pub mod response;
pub mod work_window;
