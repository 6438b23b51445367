//! Client side of the tracker: a blocking REST client plus the three view
//! models (dashboard, form, record list) the console binary renders.

pub mod api;
pub mod dashboard;
pub mod form;
pub mod records;
