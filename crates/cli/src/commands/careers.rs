// Career management commands

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Args, Subcommand};
use siteline_client::ApiClient;
use siteline_core::entities::parse_deadline;
use siteline_core::{
    find_by_id, Career, CareerInput, EmploymentType, Identified, Payload, UploadPolicy,
};

use super::{attach_file, form_from_input, published_label};
use crate::output::{print_field, print_optional, print_table_header, print_table_row, OutputFormat};

#[derive(Subcommand)]
pub enum CareersCommand {
    /// List career openings
    List {
        /// Include unpublished openings (requires admin login)
        #[arg(long)]
        all: bool,
    },

    /// Get a published opening by ID
    Get {
        /// Career ID
        career_id: String,
    },

    /// Create an opening (published unless --published false)
    Create(CareerFields),

    /// Update an opening; only the given fields change
    Update {
        /// Career ID
        career_id: String,

        #[command(flatten)]
        fields: CareerFields,
    },

    /// Delete an opening
    Delete {
        /// Career ID
        career_id: String,
    },
}

#[derive(Args)]
pub struct CareerFields {
    #[arg(long)]
    title: Option<String>,

    #[arg(long)]
    description: Option<String>,

    /// Requirement line (repeatable, order is kept)
    #[arg(long, short)]
    requirement: Vec<String>,

    #[arg(long)]
    location: Option<String>,

    /// full-time, part-time or contract
    #[arg(long = "type")]
    employment_type: Option<EmploymentType>,

    #[arg(long)]
    salary: Option<String>,

    /// Application deadline (YYYY-MM-DD or RFC 3339)
    #[arg(long)]
    deadline: Option<String>,

    #[arg(long)]
    published: Option<bool>,

    /// Image to upload (switches to a multipart request)
    #[arg(long)]
    image: Option<PathBuf>,
}

impl CareerFields {
    fn into_payload(self) -> Result<Payload<CareerInput>> {
        let requirements = (!self.requirement.is_empty()).then_some(self.requirement);
        let input = CareerInput {
            title: self.title,
            description: self.description,
            requirements,
            location: self.location,
            employment_type: self.employment_type,
            salary: self.salary,
            application_deadline: self.deadline,
            published: self.published,
        };

        match &self.image {
            None => Ok(Payload::Json(input)),
            Some(path) => {
                let form = form_from_input(&input)?;
                Ok(Payload::Multipart(attach_file(
                    form,
                    "image",
                    path,
                    UploadPolicy::IMAGE,
                )?))
            }
        }
    }
}

/// Refuse to publish an opening whose deadline has passed.
fn ensure_publishable(deadline: &str) -> Result<()> {
    let parsed = parse_deadline(deadline)
        .with_context(|| format!("Invalid application deadline: {}", deadline))?;
    if parsed < Utc::now() {
        anyhow::bail!(
            "Cannot publish a career whose application deadline ({}) has passed",
            deadline
        );
    }
    Ok(())
}

pub async fn run(
    command: CareersCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        CareersCommand::List { all } => list(client, output, all).await,
        CareersCommand::Get { career_id } => {
            let career = client.get_career(&career_id).await?;
            show(client, output, &career)
        }
        CareersCommand::Create(fields) => {
            if let (Some(deadline), true) = (&fields.deadline, fields.published != Some(false)) {
                ensure_publishable(deadline)?;
            }
            let career = client.create_career(fields.into_payload()?).await?;
            report(client, output, quiet, "Created", &career)
        }
        CareersCommand::Update { career_id, fields } => {
            if fields.published == Some(true) {
                match fields.deadline.as_deref() {
                    Some(deadline) => ensure_publishable(deadline)?,
                    None => {
                        let all = client.list_all_careers().await?;
                        let existing = find_by_id(&all, &career_id)
                            .with_context(|| format!("Career not found: {}", career_id))?;
                        ensure_publishable(&existing.application_deadline)?;
                    }
                }
            }
            let career = client
                .update_career(&career_id, fields.into_payload()?)
                .await?;
            report(client, output, quiet, "Updated", &career)
        }
        CareersCommand::Delete { career_id } => {
            client.delete_career(&career_id).await?;
            if output.is_text() && !quiet {
                println!("Deleted career: {}", career_id);
            } else if !output.is_text() {
                output.print_value(&serde_json::json!({ "id": career_id, "status": "deleted" }))?;
            }
            Ok(())
        }
    }
}

async fn list(client: &ApiClient, output: OutputFormat, all: bool) -> Result<()> {
    let careers = if all {
        client.list_all_careers().await?
    } else {
        client.list_careers().await?
    };

    if !output.is_text() {
        return output.print_value(&careers);
    }

    if careers.is_empty() {
        println!("No careers found");
        return Ok(());
    }

    let now = Utc::now();
    print_table_header(&[
        ("ID", 26),
        ("TITLE", 28),
        ("TYPE", 10),
        ("DEADLINE", 12),
        ("STATUS", 10),
    ]);
    for career in &careers {
        let status = if career.is_expired(now) {
            "EXPIRED"
        } else {
            published_label(career.published)
        };
        print_table_row(&[
            (&career.canonical_id(), 26),
            (&career.title, 28),
            (career.employment_type.as_str(), 10),
            (&career.application_deadline, 12),
            (status, 10),
        ]);
    }
    Ok(())
}

fn report(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    verb: &str,
    career: &Career,
) -> Result<()> {
    if !output.is_text() {
        return output.print_value(career);
    }
    if quiet {
        println!("{}", career.canonical_id());
        return Ok(());
    }
    println!("{} career: {}", verb, career.canonical_id());
    show(client, output, career)
}

fn show(client: &ApiClient, output: OutputFormat, career: &Career) -> Result<()> {
    if !output.is_text() {
        return output.print_value(career);
    }

    print_field("ID", &career.canonical_id());
    print_field("Title", &career.title);
    print_field("Type", career.employment_type.as_str());
    print_optional("Location", Some(career.location.as_str()));
    print_optional("Salary", career.salary.as_deref());
    print_field("Deadline", &career.application_deadline);
    let status = if career.is_expired(Utc::now()) {
        "expired"
    } else {
        published_label(career.published)
    };
    print_field("Status", status);
    if !career.requirements.is_empty() {
        println!("Requirements:");
        for (i, requirement) in career.requirements.iter().enumerate() {
            println!("  {}. {}", i + 1, requirement);
        }
    }
    print_optional("Image", client.resolve_url(career.image.as_deref()).as_deref());
    print_optional("Description", Some(career.description.as_str()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_publishable() {
        assert!(ensure_publishable("2000-01-01").is_err());
        assert!(ensure_publishable("2999-12-31").is_ok());
        assert!(ensure_publishable("tomorrow").is_err());
    }
}
