use std::sync::Arc;

use crate::{
    cli::display_contact,
    prelude::{
        AppError, ContactStore, StorageMediums,
        command::{Cli, Commands},
        parse_storage_type, web,
    },
};
use clap::Parser;

pub fn run_app() -> Result<(), AppError> {
    run(Cli::parse())
}

pub fn run(cli: Cli) -> Result<(), AppError> {
    let medium = StorageMediums::from(&cli.storage_choice)?;
    let store = ContactStore::open(parse_storage_type(medium, &cli.contacts_path));

    tracing::debug!(
        medium = medium.is_which(),
        path = %cli.contacts_path,
        "storage ready"
    );

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;

            runtime.block_on(web::serve(Arc::new(store), &cli.addr))?;
            Ok(())
        }

        Commands::Add {
            name,
            phone,
            email,
            address,
        } => {
            store.add(&name, &phone, &email, &address);
            println!("Contact added successfully");
            Ok(())
        }

        // Listing contacts
        Commands::List => {
            let contacts = store.list();
            if contacts.is_empty() {
                println!("No contact yet");
                return Ok(());
            }

            for (mut i, c) in contacts.iter().enumerate() {
                i += 1;
                println!(
                    "{i:>3}. {:<20} {:15} {:^30} {:<30}",
                    c.name, c.phone, c.email, c.address
                );
            }
            Ok(())
        }

        Commands::Search { name } => {
            match store.find(&name) {
                Some(contact) => println!("{}", display_contact(&contact)),
                None => println!("No contact found with name {name}"),
            }
            Ok(())
        }

        // Edit Contact
        Commands::Update {
            name,
            new_name,
            phone,
            email,
            address,
        } => {
            if !store.update(&name, &new_name, &phone, &email, &address) {
                return Err(AppError::NotFound("Contact".to_string()));
            }

            println!("Contact updated successfully");
            Ok(())
        }

        // Delete Contact
        Commands::Delete { name } => {
            if !store.delete(&name) {
                return Err(AppError::NotFound("Contact".to_string()));
            }

            println!("Contact deleted successfully");
            Ok(())
        }
    }
}
