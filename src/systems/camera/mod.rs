mod view;

pub use view::{camera_view_system, project, to_transform};
