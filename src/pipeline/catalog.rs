//! Catalog pipeline: compose → report → write

use std::fmt;
use std::io::Write;
use std::path::Path;
use tracing::{info, warn};

use crate::errors::PipelineError;
use crate::models::CatalogDocument;
use crate::services::catalog::CatalogBuilder;
use crate::services::writer::write_json;

const REPORT_PREVIEW: usize = 5;

/// Build the static catalog and write it to `output`
pub async fn run(
    builder: &CatalogBuilder,
    output: &Path,
    report: &mut dyn Write,
) -> Result<CatalogDocument, PipelineError> {
    let document = builder.build_document();
    info!("Composed {} catalog channels", document.total_channels);

    if let Err(e) = write!(report, "{}", CatalogReport(&document)) {
        warn!("Failed to print report: {}", e);
    }

    write_json(output, &document).await?;
    if let Err(e) = write!(
        report,
        "\nSaved {} channels to {}\n\n\
         To get actual stream URLs:\n\
         1. Visit each player_url in a browser\n\
         2. Inspect the video player iframe source\n\
         3. Or automate the extraction with a headless browser\n",
        document.total_channels,
        output.display()
    ) {
        warn!("Failed to print report: {}", e);
    }

    Ok(document)
}

/// Console summary of the composed catalog
pub struct CatalogReport<'a>(pub &'a CatalogDocument);

impl fmt::Display for CatalogReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extracted {} channels", self.0.total_channels)?;
        writeln!(f, "\nSample channels:")?;
        for entry in self.0.channels.iter().take(REPORT_PREVIEW) {
            writeln!(f, "  - {}", entry.name)?;
            writeln!(f, "    {}", entry.player_url)?;
        }
        Ok(())
    }
}
