pub mod books {
    pub mod domain;
    pub mod dto;
    pub mod factory;
}
pub mod catalog;
pub mod checkout;
pub mod core {
    pub mod command;
    pub mod context;
    pub mod domain;
    pub mod events;
    pub mod library;
}
pub mod members;
pub mod reports;
pub mod utils {
    pub mod date;
    pub mod logs;
}
