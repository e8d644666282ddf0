use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;
use phonebook::contact::Contact;

pub fn build_contacts_table(contacts: &[&Contact], show_ids: bool) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut headers = vec![
        Cell::new("Name").add_attribute(Attribute::Bold),
        Cell::new("Number").add_attribute(Attribute::Bold),
    ];
    if show_ids {
        headers.push(Cell::new("Id").add_attribute(Attribute::Bold));
    }
    table.set_header(headers);

    for contact in contacts {
        let mut row = vec![contact.name.clone(), contact.number.clone()];
        if show_ids {
            row.push(contact.id.to_string());
        }
        table.add_row(row);
    }

    table
}

pub fn display_contacts(contacts: &[&Contact], total: usize, filter: &str, show_ids: bool) {
    if contacts.is_empty() {
        if total == 0 {
            println!("{}", "No contacts yet.".yellow());
        } else {
            println!("{}", format!("No contacts match '{}'.", filter).yellow());
        }
        return;
    }

    println!("{}", build_contacts_table(contacts, show_ids));

    let summary = if filter.is_empty() {
        format!("{} contacts", contacts.len())
    } else {
        format!(
            "{} of {} contacts match '{}'",
            contacts.len(),
            total,
            filter
        )
    };
    println!("\n{}", summary.green());
}
