use crate::{
    cli::{contact_table, menu::Menu, search_table},
    config::ServerConfig,
    prelude::{
        AppError, Config,
        command::{Cli, Commands},
        storage::port::{export_contacts_to_csv, import_contacts_from_csv},
    },
    server,
};
use clap::Parser;
use std::io;

pub fn run_app() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = Config::new(cli.file);

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let mut store = config.open_store();
            let stdin = io::stdin();
            Menu::new(&mut store, stdin.lock(), io::stdout()).run()
        }

        Commands::Serve { host, port } => {
            let store = config.open_server_store();
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?;
            runtime.block_on(server::run(ServerConfig { host, port }, &config, store))
        }

        // Listing contacts
        Commands::List { sort } => {
            let store = config.open_store();
            println!("{}", contact_table(&store.list(sort)));
            Ok(())
        }

        Commands::Add { name, phone, email } => {
            let mut store = config.open_store();
            let contact = store.add(&name, &phone, &email)?;

            println!("Contact '{}' added successfully!", contact.name);
            Ok(())
        }

        // Search for a contact
        Commands::Search { query } => {
            let store = config.open_store();
            println!("{}", search_table(&query, &store.search(&query)));
            Ok(())
        }

        // Edit Contact
        Commands::Edit {
            name,
            new_name,
            new_phone,
            new_email,
        } => {
            let mut store = config.open_store();
            let current = store.find(&name)?.clone();

            store.update(
                &current.name,
                new_name.as_deref().unwrap_or(&current.name),
                new_phone.as_deref().unwrap_or(&current.phone),
                new_email.as_deref().unwrap_or(&current.email),
            )?;

            println!("Contact '{}' updated successfully!", current.name);
            Ok(())
        }

        // Delete Contact
        Commands::Delete { name } => {
            let mut store = config.open_store();
            let removed = store.delete(&name)?;

            println!("Contact '{}' deleted successfully!", removed.name);
            Ok(())
        }

        // Import contacts into storage from .csv file
        Commands::Import { src } => {
            let mut store = config.open_store();
            let summary = import_contacts_from_csv(&mut store, src.as_deref())?;

            println!(
                "Successfully imported {} contacts from {:?} ({} skipped).",
                summary.imported, summary.path, summary.skipped
            );
            Ok(())
        }

        Commands::Export { des } => {
            let store = config.open_store();
            let (path, total) = export_contacts_to_csv(&store.list(false), des.as_deref())?;

            println!("Successfully exported {} contacts to {:?}.", total, path);
            Ok(())
        }
    }
}
