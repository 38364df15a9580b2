// Blog management commands

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};
use siteline_client::ApiClient;
use siteline_core::upload::format_size;
use siteline_core::{Blog, BlogInput, Identified, Payload, UploadPolicy};

use super::{attach_file, form_from_input, published_label, yes_no};
use crate::output::{print_field, print_optional, print_table_header, print_table_row, OutputFormat};

#[derive(Subcommand)]
pub enum BlogsCommand {
    /// List blog posts
    List {
        /// Include drafts (requires admin login)
        #[arg(long)]
        all: bool,
    },

    /// Get a published post by ID
    Get {
        /// Blog ID
        blog_id: String,
    },

    /// Create a post (published unless --published false)
    Create(BlogFields),

    /// Update a post; only the given fields change
    Update {
        /// Blog ID
        blog_id: String,

        #[command(flatten)]
        fields: BlogFields,
    },

    /// Delete a post
    Delete {
        /// Blog ID
        blog_id: String,
    },
}

#[derive(Args)]
pub struct BlogFields {
    #[arg(long)]
    title: Option<String>,

    /// Article body
    #[arg(long)]
    content: Option<String>,

    #[arg(long)]
    excerpt: Option<String>,

    #[arg(long)]
    author: Option<String>,

    #[arg(long)]
    published: Option<bool>,

    /// Cover image to upload
    #[arg(long)]
    image: Option<PathBuf>,

    /// PDF document; makes this a document post
    #[arg(long)]
    pdf: Option<PathBuf>,
}

impl BlogFields {
    fn into_payload(self) -> Result<Payload<BlogInput>> {
        let input = BlogInput {
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            author: self.author,
            image: None,
            is_pdf_post: self.pdf.as_ref().map(|_| true),
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
    command: BlogsCommand,
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
) -> Result<()> {
    match command {
        BlogsCommand::List { all } => list(client, output, all).await,
        BlogsCommand::Get { blog_id } => {
            let blog = client.get_blog(&blog_id).await?;
            show(client, output, &blog)
        }
        BlogsCommand::Create(fields) => {
            let blog = client.create_blog(fields.into_payload()?).await?;
            report(client, output, quiet, "Created", &blog)
        }
        BlogsCommand::Update { blog_id, fields } => {
            let blog = client.update_blog(&blog_id, fields.into_payload()?).await?;
            report(client, output, quiet, "Updated", &blog)
        }
        BlogsCommand::Delete { blog_id } => {
            client.delete_blog(&blog_id).await?;
            if output.is_text() && !quiet {
                println!("Deleted blog: {}", blog_id);
            } else if !output.is_text() {
                output.print_value(&serde_json::json!({ "id": blog_id, "status": "deleted" }))?;
            }
            Ok(())
        }
    }
}

async fn list(client: &ApiClient, output: OutputFormat, all: bool) -> Result<()> {
    let blogs = if all {
        client.list_all_blogs().await?
    } else {
        client.list_blogs().await?
    };

    if !output.is_text() {
        return output.print_value(&blogs);
    }

    if blogs.is_empty() {
        println!("No blogs found");
        return Ok(());
    }

    print_table_header(&[("ID", 26), ("TITLE", 32), ("AUTHOR", 18), ("KIND", 8), ("STATUS", 10)]);
    for blog in &blogs {
        let kind = if blog.is_pdf_post { "pdf" } else { "article" };
        print_table_row(&[
            (&blog.canonical_id(), 26),
            (&blog.title, 32),
            (&blog.author, 18),
            (kind, 8),
            (published_label(blog.published), 10),
        ]);
    }
    Ok(())
}

fn report(
    client: &ApiClient,
    output: OutputFormat,
    quiet: bool,
    verb: &str,
    blog: &Blog,
) -> Result<()> {
    if !output.is_text() {
        return output.print_value(blog);
    }
    if quiet {
        println!("{}", blog.canonical_id());
        return Ok(());
    }
    println!("{} blog: {}", verb, blog.canonical_id());
    show(client, output, blog)
}

fn show(client: &ApiClient, output: OutputFormat, blog: &Blog) -> Result<()> {
    if !output.is_text() {
        return output.print_value(blog);
    }

    print_field("ID", &blog.canonical_id());
    print_field("Title", &blog.title);
    print_optional("Author", Some(blog.author.as_str()));
    print_field("Status", published_label(blog.published));
    print_field("PDF post", yes_no(blog.is_pdf_post));
    print_optional("Image", client.resolve_url(blog.image.as_deref()).as_deref());
    print_optional("PDF", client.resolve_url(blog.pdf_url.as_deref()).as_deref());
    print_optional("File", blog.file_name.as_deref());
    if let Some(size) = blog.file_size {
        print_field("File size", &format_size(size));
    }
    print_optional("Excerpt", blog.excerpt.as_deref());
    print_optional("Created", blog.created_at.as_deref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields() -> BlogFields {
        BlogFields {
            title: Some("Annual report".to_string()),
            content: None,
            excerpt: None,
            author: Some("Finance".to_string()),
            published: None,
            image: None,
            pdf: None,
        }
    }

    #[test]
    fn test_text_only_post_is_json() {
        let payload = fields().into_payload().unwrap();
        let Payload::Json(input) = payload else {
            panic!("expected JSON payload");
        };
        assert_eq!(input.is_pdf_post, None);
        assert_eq!(input.author.as_deref(), Some("Finance"));
    }

    #[test]
    fn test_pdf_marks_document_post() {
        let pdf = std::env::temp_dir().join(format!("siteline-blog-{}.pdf", std::process::id()));
        std::fs::write(&pdf, b"%PDF-1.4").unwrap();

        let payload = BlogFields {
            pdf: Some(pdf.clone()),
            ..fields()
        }
        .into_payload()
        .unwrap();
        let Payload::Multipart(form) = payload else {
            panic!("expected multipart payload");
        };
        assert_eq!(form.get_text("isPdfPost"), Some("true"));
        assert!(form.has_files());

        std::fs::remove_file(&pdf).unwrap();
    }
}
