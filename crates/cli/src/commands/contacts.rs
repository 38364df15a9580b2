// Contact-form commands

use anyhow::Result;
use clap::Subcommand;
use siteline_client::ApiClient;
use siteline_core::{ContactInput, Identified};

use super::yes_no;
use crate::output::{print_field, print_optional, print_table_header, print_table_row, OutputFormat};

#[derive(Subcommand)]
pub enum ContactsCommand {
    /// List contact submissions (requires admin login)
    List {
        /// Only show unread messages
        #[arg(long)]
        unread: bool,
    },

    /// Mark a submission as read
    Read {
        /// Contact ID
        contact_id: String,
    },

    /// Delete a submission
    Delete {
        /// Contact ID
        contact_id: String,
    },

    /// Send a message through the public contact form
    Submit {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        message: String,
    },
}

pub async fn run(
    command: ContactsCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        ContactsCommand::List { unread } => {
            let mut contacts = client.list_contacts().await?;
            if unread {
                contacts.retain(|c| !c.read);
            }

            if !output.is_text() {
                return output.print_value(&contacts);
            }
            if contacts.is_empty() {
                println!("No contact messages found");
                return Ok(());
            }

            print_table_header(&[
                ("ID", 26),
                ("NAME", 20),
                ("EMAIL", 28),
                ("READ", 6),
                ("RECEIVED", 22),
            ]);
            for contact in &contacts {
                print_table_row(&[
                    (&contact.canonical_id(), 26),
                    (&contact.name, 20),
                    (&contact.email, 28),
                    (yes_no(contact.read), 6),
                    (contact.created_at.as_deref().unwrap_or("-"), 22),
                ]);
            }
            Ok(())
        }
        ContactsCommand::Read { contact_id } => {
            let contact = client.mark_contact_read(&contact_id).await?;
            if !output.is_text() {
                return output.print_value(&contact);
            }
            if quiet {
                return Ok(());
            }
            print_field("ID", &contact.canonical_id());
            print_field("From", &format!("{} <{}>", contact.name, contact.email));
            print_field("Read", yes_no(contact.read));
            print_optional("Received", contact.created_at.as_deref());
            println!();
            println!("{}", contact.message);
            Ok(())
        }
        ContactsCommand::Delete { contact_id } => {
            client.delete_contact(&contact_id).await?;
            if output.is_text() && !quiet {
                println!("Deleted contact: {}", contact_id);
            } else if !output.is_text() {
                output.print_value(&serde_json::json!({ "id": contact_id, "status": "deleted" }))?;
            }
            Ok(())
        }
        ContactsCommand::Submit {
            name,
            email,
            message,
        } => {
            let input = ContactInput {
                name,
                email,
                message,
            };
            client.submit_contact(&input).await?;
            if output.is_text() && !quiet {
                println!("Message sent");
            } else if !output.is_text() {
                output.print_value(&serde_json::json!({ "status": "sent" }))?;
            }
            Ok(())
        }
    }
}
