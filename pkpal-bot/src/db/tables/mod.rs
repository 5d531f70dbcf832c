pub mod member_notes;
