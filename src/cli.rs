pub mod command;
pub mod menu;
mod run;

pub use run::run_app;

use crate::domain::Contact;

const RULE_WIDTH: usize = 80;

fn rule(c: char) -> String {
    c.to_string().repeat(RULE_WIDTH)
}

pub fn table_header() -> String {
    format!("{:<25} | {:<15} | {:<20}", "Name", "Phone", "Email")
}

pub fn display_contact(contact: &Contact) -> String {
    format!(
        "{:<25} | {:<15} | {:<20}",
        contact.name, contact.phone, contact.email
    )
}

/// Full listing with a closing total, as shown by "view all".
pub fn contact_table(contacts: &[&Contact]) -> String {
    if contacts.is_empty() {
        return "\nNo contacts found.".to_string();
    }

    let mut lines = vec![
        String::new(),
        rule('-'),
        table_header(),
        rule('-'),
    ];
    lines.extend(contacts.iter().map(|c| display_contact(c)));
    lines.push(rule('='));
    lines.push(format!("Total: {} contacts", contacts.len()));
    lines.join("\n")
}

pub fn search_table(query: &str, results: &[&Contact]) -> String {
    if results.is_empty() {
        return format!("\nNo contacts found matching '{}'.", query);
    }

    let mut lines = vec![
        String::new(),
        format!("Found {} results", results.len()),
        rule('-'),
        table_header(),
        rule('-'),
    ];
    lines.extend(results.iter().map(|c| display_contact(c)));
    lines.push(rule('-'));
    lines.join("\n")
}
