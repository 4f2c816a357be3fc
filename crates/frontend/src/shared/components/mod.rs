pub mod badges;
pub mod list_actions;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
pub mod table;
