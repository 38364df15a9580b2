// Company, services and health commands

use anyhow::Result;
use siteline_client::ApiClient;
use siteline_core::Identified;

use crate::output::{print_field, print_optional, print_table_header, print_table_row, OutputFormat};

pub async fn company(client: &ApiClient, output: OutputFormat) -> Result<()> {
    let info = client.get_company_info().await?;
    if !output.is_text() {
        return output.print_value(&info);
    }

    print_field("Name", &info.name);
    print_optional("Tagline", info.tagline.as_deref());
    print_optional("Email", info.email.as_deref());
    print_optional("Phone", info.phone.as_deref());
    print_optional("Address", info.address.as_deref());
    if !info.description.is_empty() {
        println!();
        println!("{}", info.description);
    }
    Ok(())
}

pub async fn services(client: &ApiClient, output: OutputFormat) -> Result<()> {
    let services = client.list_services().await?;
    if !output.is_text() {
        return output.print_value(&services);
    }

    if services.is_empty() {
        println!("No services found");
        return Ok(());
    }

    print_table_header(&[("ID", 26), ("TITLE", 30), ("DESCRIPTION", 50)]);
    for service in &services {
        print_table_row(&[
            (&service.canonical_id(), 26),
            (&service.title, 30),
            (&service.description, 50),
        ]);
    }
    Ok(())
}

pub async fn health(client: &ApiClient, output: OutputFormat) -> Result<()> {
    let status = client.health().await?;
    if !output.is_text() {
        return output.print_value(&status);
    }

    print_field("Backend", client.base_url());
    print_field("Status", &status.status);
    for (key, value) in &status.details {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        print_field(key, &text);
    }
    Ok(())
}
