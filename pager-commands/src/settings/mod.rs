//! Commands that change the page size or reconfigure the list.

pub mod size;
pub mod sizes;
pub mod total;
pub mod window;
