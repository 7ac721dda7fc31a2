pub mod header;
pub mod search_form;
pub mod search_results;
pub mod match_card;
