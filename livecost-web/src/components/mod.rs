pub mod address_form;
pub mod amenity_lists;
pub mod collapsible;
pub mod disclaimer_modal;
pub mod expense_cards;
pub mod footer;
pub mod header;
pub mod pie_chart;
