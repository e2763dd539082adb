pub mod clock;
pub mod dto;
