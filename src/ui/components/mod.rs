pub mod app_list;
pub mod detail_panel;
pub mod footer;
pub mod tabs;
