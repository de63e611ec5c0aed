use crate::cli::{contact_table, search_table};
use crate::prelude::{AppError, ContactStore};
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MenuChoice {
    ViewAll,
    Add,
    Search,
    Edit,
    Delete,
    SaveAndExit,
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuChoice::ViewAll),
            "2" => Ok(MenuChoice::Add),
            "3" => Ok(MenuChoice::Search),
            "4" => Ok(MenuChoice::Edit),
            "5" => Ok(MenuChoice::Delete),
            "0" => Ok(MenuChoice::SaveAndExit),
            other => Err(AppError::ParseCommand(other.to_string())),
        }
    }
}

/// Prompt/print loop over a [`ContactStore`].
///
/// Confirmation before delete and "blank keeps the current value" during edit
/// are handled here; the store only ever sees final values.
pub struct Menu<'a, R, W> {
    store: &'a mut ContactStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut ContactStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    /// Runs until "0" is chosen or input ends, then saves.
    pub fn run(&mut self) -> Result<(), AppError> {
        loop {
            self.show_menu()?;

            // End of input behaves like "0"
            let Some(action) = self.prompt("\nSelect an option: ")? else {
                return self.save_and_exit();
            };

            match action.parse::<MenuChoice>() {
                Ok(MenuChoice::ViewAll) => self.view_all()?,
                Ok(MenuChoice::Add) => self.add()?,
                Ok(MenuChoice::Search) => self.search()?,
                Ok(MenuChoice::Edit) => self.edit()?,
                Ok(MenuChoice::Delete) => self.delete()?,
                Ok(MenuChoice::SaveAndExit) => return self.save_and_exit(),
                Err(e) => writeln!(self.output, "{}", e)?,
            }
        }
    }

    fn show_menu(&mut self) -> Result<(), AppError> {
        let rule = "=".repeat(80);
        writeln!(self.output, "\n{}", rule)?;
        writeln!(self.output, "Contact Book - Terminal CLI")?;
        writeln!(self.output, "{}", rule)?;
        writeln!(self.output, "1. View All Contacts")?;
        writeln!(self.output, "2. Add Contact")?;
        writeln!(self.output, "3. Search Contacts")?;
        writeln!(self.output, "4. Edit Contact")?;
        writeln!(self.output, "5. Delete Contact")?;
        writeln!(self.output, "0. Save and Exit")?;
        Ok(())
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut input = String::new();
        if self.input.read_line(&mut input)? == 0 {
            return Ok(None);
        }
        Ok(Some(input.trim().to_string()))
    }

    fn ask(&mut self, label: &str) -> Result<String, AppError> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn report(&mut self, err: &AppError) -> Result<(), AppError> {
        writeln!(self.output, "Error: {}", err)?;
        Ok(())
    }

    fn view_all(&mut self) -> Result<(), AppError> {
        let table = contact_table(&self.store.list(true));
        writeln!(self.output, "{}", table)?;
        Ok(())
    }

    fn add(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nAdd New Contact")?;
        let name = self.ask("Name: ")?;
        let phone = self.ask("Phone: ")?;
        let email = self.ask("Email: ")?;

        match self.store.add(&name, &phone, &email) {
            Ok(contact) => {
                writeln!(self.output, "Contact '{}' added successfully!", contact.name)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn search(&mut self) -> Result<(), AppError> {
        let query = self.ask("\nSearch for: ")?;
        let table = search_table(&query, &self.store.search(&query));
        writeln!(self.output, "{}", table)?;
        Ok(())
    }

    fn edit(&mut self) -> Result<(), AppError> {
        let name = self.ask("\nEnter name of contact to update: ")?;

        let current = match self.store.find(&name) {
            Ok(contact) => contact.clone(),
            Err(e) => return self.report(&e),
        };

        writeln!(self.output, "Name: {}", current.name)?;
        writeln!(self.output, "Phone: {}", current.phone)?;
        writeln!(self.output, "Email: {}", current.email)?;
        writeln!(self.output, "\nLeave a field empty to keep the current value.")?;

        let new_name = self.ask(&format!("New name [{}]: ", current.name))?;
        let new_phone = self.ask(&format!("New phone [{}]: ", current.phone))?;
        let new_email = self.ask(&format!("New email [{}]: ", current.email))?;

        let keep = |input: String, existing: &str| {
            if input.is_empty() {
                existing.to_string()
            } else {
                input
            }
        };
        let new_name = keep(new_name, &current.name);
        let new_phone = keep(new_phone, &current.phone);
        let new_email = keep(new_email, &current.email);

        match self
            .store
            .update(&current.name, &new_name, &new_phone, &new_email)
        {
            Ok(_) => {
                writeln!(self.output, "Contact '{}' updated successfully!", current.name)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn delete(&mut self) -> Result<(), AppError> {
        let name = self.ask("\nEnter name of contact to delete: ")?;

        let target = match self.store.find(&name) {
            Ok(contact) => contact.name.clone(),
            Err(e) => return self.report(&e),
        };

        let consent = self
            .ask(&format!(
                "Are you sure you want to delete '{}'? (yes/no): ",
                target
            ))?
            .to_lowercase();
        if consent != "yes" {
            writeln!(self.output, "Deletion cancelled.")?;
            return Ok(());
        }

        match self.store.delete(&target) {
            Ok(removed) => {
                writeln!(self.output, "Contact '{}' deleted successfully!", removed.name)?;
            }
            Err(e) => self.report(&e)?,
        }
        Ok(())
    }

    fn save_and_exit(&mut self) -> Result<(), AppError> {
        writeln!(self.output, "\nSaving contacts to file...")?;
        self.store.save()?;
        writeln!(self.output, "\nData saved. Goodbye!")?;
        Ok(())
    }
}
