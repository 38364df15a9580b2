// Event management commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use siteline_client::ApiClient;
use siteline_core::{Event, EventInput, Identified, Payload, UploadPolicy};

use super::{attach_file, form_from_input, published_label};
use crate::output::{print_field, print_optional, print_table_header, print_table_row, OutputFormat};

#[derive(Subcommand)]
pub enum EventsCommand {
    /// List published events
    List,

    /// Get event by ID
    Get {
        /// Event ID
        event_id: String,
    },

    /// Create a new event (published unless --published false)
    Create(EventFields),

    /// Update an event; only the given fields change
    Update {
        /// Event ID
        event_id: String,

        #[command(flatten)]
        fields: EventFields,
    },

    /// Delete an event
    Delete {
        /// Event ID
        event_id: String,
    },
}

#[derive(Args)]
pub struct EventFields {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Event date (ISO 8601)
    #[arg(long)]
    date: Option<String>,

    #[arg(long)]
    location: Option<String>,

    #[arg(long)]
    published: Option<bool>,

    /// Image to upload (switches to a multipart request)
    #[arg(long)]
    image: Option<PathBuf>,

    /// PDF to upload (switches to a multipart request)
    #[arg(long)]
    pdf: Option<PathBuf>,
}

impl EventFields {
    fn into_payload(self) -> Result<Payload<EventInput>> {
        let input = EventInput {
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            image: None,
            published: self.published,
        };

        if self.image.is_none() && self.pdf.is_none() {
            return Ok(Payload::Json(input));
        }

        let mut form = form_from_input(&input)?;
        if let Some(path) = &self.image {
            form = attach_file(form, "image", path, UploadPolicy::IMAGE)?;
        }
        if let Some(path) = &self.pdf {
            form = attach_file(form, "pdf", path, UploadPolicy::DOCUMENT)?;
        }
        Ok(Payload::Multipart(form))
    }
}

pub async fn run(
    command: EventsCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        EventsCommand::List => list(client, output).await,
        EventsCommand::Get { event_id } => {
            let event = client.get_event(&event_id).await?;
            show(client, output, &event)
        }
        EventsCommand::Create(fields) => {
            let event = client.create_event(fields.into_payload()?).await?;
            report(client, output, quiet, "Created", &event)
        }
        EventsCommand::Update { event_id, fields } => {
            let event = client.update_event(&event_id, fields.into_payload()?).await?;
            report(client, output, quiet, "Updated", &event)
        }
        EventsCommand::Delete { event_id } => {
            client.delete_event(&event_id).await?;
            if output.is_text() && !quiet {
                println!("Deleted event: {}", event_id);
            } else if !output.is_text() {
                output.print_value(&serde_json::json!({ "id": event_id, "status": "deleted" }))?;
            }
            Ok(())
        }
    }
}

async fn list(client: &ApiClient, output: OutputFormat) -> Result<()> {
    let events = client.list_events().await?;

    if !output.is_text() {
        return output.print_value(&events);
    }

    if events.is_empty() {
        println!("No events found");
        return Ok(());
    }

    print_table_header(&[("ID", 26), ("TITLE", 30), ("DATE", 12), ("LOCATION", 20)]);
    for event in &events {
        print_table_row(&[
            (&event.canonical_id(), 26),
            (&event.title, 30),
            (&event.date, 12),
            (&event.location, 20),
        ]);
    }
    Ok(())
}

fn report(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    verb: &str,
    event: &Event,
) -> Result<()> {
    if !output.is_text() {
        return output.print_value(event);
    }
    if quiet {
        println!("{}", event.canonical_id());
        return Ok(());
    }
    println!("{} event: {}", verb, event.canonical_id());
    show(client, output, event)
}

fn show(client: &ApiClient, output: OutputFormat, event: &Event) -> Result<()> {
    if !output.is_text() {
        return output.print_value(event);
    }

    print_field("ID", &event.canonical_id());
    print_field("Title", &event.title);
    print_field("Date", &event.date);
    print_optional("Location", Some(event.location.as_str()));
    print_field("Status", published_label(event.published));
    print_optional("Image", client.resolve_url(event.image.as_deref()).as_deref());
    print_optional("PDF", client.resolve_url(event.pdf.as_deref()).as_deref());
    print_optional("Description", Some(event.description.as_str()));
    Ok(())
}
