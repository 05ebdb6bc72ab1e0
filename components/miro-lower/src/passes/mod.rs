pub mod extern_check;
pub mod foreign_code;
