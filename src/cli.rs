pub mod command;
pub mod run;

pub use run::run_app;

use crate::domain::Contact;

pub fn display_contact(contact: &Contact) -> String {
    let output = format!(
        "Name: {}\n\
        Phone: {}\n\
        Email: {}\n\
        Address: {}",
        contact.name, contact.phone, contact.email, contact.address
    );
    output
}
