//! Record shapes exchanged with the backend.
//!
//! Every record is owned by the backend. The pages only ever hold transient
//! copies that are replaced wholesale by the next full-list refresh.

pub mod customer;
pub mod health;
pub mod item;
pub mod sample;
