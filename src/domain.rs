pub mod contact;
pub mod store;

pub use contact::Contact;
pub use store::ContactStore;
