//! Render command handler
//!
//! Prints the pagination strip for one page without starting the server.

use std::sync::Arc;

use crate::api::dto::PaginationResponse;
use crate::cli::parser::{OutputFormat, RenderArgs};
use crate::config::Settings;
use crate::error::{AppError, AppResult};
use crate::pagination::PageDescriptor;
use crate::services::{PageRequest, PaginationService, RenderedPage};

/// Handler for the render command
pub struct RenderCommandHandler {
    service: PaginationService,
}

impl RenderCommandHandler {
    pub fn new(settings: &Settings) -> Self {
        Self {
            service: PaginationService::new(Arc::new(settings.pagination.clone())),
        }
    }

    /// Render and print to stdout
    pub async fn execute(&self, args: &RenderArgs) -> AppResult<()> {
        let output = self.render(args)?;
        println!("{output}");
        Ok(())
    }

    /// Render the strip in the requested format.
    ///
    /// # Errors
    /// Same as [`PaginationService::render`], plus `Internal` if JSON
    /// serialization fails.
    pub fn render(&self, args: &RenderArgs) -> AppResult<String> {
        let request = PageRequest {
            page: args.page,
            page_size: args.page_size,
            total_items: args.total_items,
            item_type: args.item_type.clone(),
            path: args.path.clone(),
            query: Vec::new(),
        };
        let rendered = self.service.render(request)?;

        match args.format {
            OutputFormat::Text => Ok(format_text(&rendered)),
            OutputFormat::Json => serde_json::to_string_pretty(&PaginationResponse::from(rendered))
                .map_err(|e| AppError::Internal {
                    source: anyhow::Error::new(e).context("Failed to serialize pagination"),
                }),
        }
    }
}

/// Summary line, then the strip with the active page in brackets
fn format_text(rendered: &RenderedPage) -> String {
    let mut output = rendered.result.summary.clone();
    if rendered.links.is_empty() {
        return output;
    }

    let strip: Vec<String> = rendered
        .links
        .iter()
        .map(|link| match link.descriptor {
            PageDescriptor::Active { page } => format!("[{page}]"),
            _ => link.label.clone(),
        })
        .collect();

    output.push('\n');
    output.push_str(&strip.join(" "));
    output
}
