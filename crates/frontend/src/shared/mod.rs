pub mod api;
pub mod api_utils;
pub mod components;
pub mod data_table;
pub mod date_utils;
pub mod export;
pub mod icons;
pub mod list_utils;
pub mod remote_list;
pub mod toast;
