pub mod api;
pub mod js;
pub mod web;
