pub mod pull_request;
pub mod work_item;
