//! Process command - extract data from a single document file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use rutex_core::pdf::PageTextProvider;
use rutex_core::{ContentStreamProvider, DocumentKind, ParsedDocument, RutexConfig};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input PDF file
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Document kind (auto-detected when omitted)
    #[arg(short, long, value_enum)]
    kind: Option<KindArg>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum KindArg {
    /// Tax-registration certificate
    Rut,
    /// Billing-authorization resolution
    Resolution,
}

impl From<KindArg> for DocumentKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Rut => DocumentKind::Rut,
            KindArg::Resolution => DocumentKind::Resolution,
        }
    }
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();

    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Processing file: {}", args.input.display());

    let document = parse_file(&args.input, &config, args.kind.map(Into::into))?;

    let output = format_document(&document, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

pub fn load_config(config_path: Option<&str>) -> anyhow::Result<RutexConfig> {
    Ok(match config_path {
        Some(path) => RutexConfig::from_file(Path::new(path))?,
        None => RutexConfig::default(),
    })
}

/// Parse one PDF into a document record.
pub fn parse_file(
    path: &Path,
    config: &RutexConfig,
    kind: Option<DocumentKind>,
) -> anyhow::Result<ParsedDocument> {
    let data = fs::read(path)?;
    let provider = ContentStreamProvider::from_bytes(&data)?;
    debug!("PDF has {} pages", provider.page_count());

    // Resolutions spread their sections over two pages; certificates fit on
    // one. Without an explicit kind, read the wider selection and let the
    // token content decide.
    let pages = match kind {
        Some(DocumentKind::Rut) => &config.pages.rut,
        Some(DocumentKind::Resolution) | None => &config.pages.resolution,
    };

    let pages: Vec<u32> = pages
        .iter()
        .copied()
        .filter(|&p| p <= provider.page_count())
        .collect();
    if pages.is_empty() {
        anyhow::bail!("None of the configured pages exist in {}", path.display());
    }

    let text = provider.page_text(&pages)?;
    let document = rutex_core::parse_text(&text, kind)?;

    Ok(document)
}

pub fn format_document(document: &ParsedDocument, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(document)?),
        OutputFormat::Csv => format_csv(document),
        OutputFormat::Text => Ok(format_text(document)),
    }
}

fn format_csv(document: &ParsedDocument) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    match document {
        ParsedDocument::Rut(doc) => {
            wtr.write_record([
                "identification",
                "check_digit",
                "party_type",
                "full_name",
                "company_name",
                "dept",
                "city",
                "address",
                "email",
                "phone1",
                "phone2",
                "tax_level",
            ])?;
            let party_type = doc
                .party
                .party_type
                .as_ref()
                .map(|t| serde_plain(t))
                .transpose()?
                .unwrap_or_default();
            let tax_level = doc
                .party
                .tax_level
                .as_ref()
                .map(|t| serde_plain(t))
                .transpose()?
                .unwrap_or_default();
            wtr.write_record([
                &doc.identification.number,
                &doc.identification.check_digit,
                &party_type,
                &doc.party.full_name(),
                doc.party.company_name.as_deref().unwrap_or(""),
                doc.party.dept.as_deref().unwrap_or(""),
                doc.party.city.as_deref().unwrap_or(""),
                doc.party.address.as_deref().unwrap_or(""),
                doc.party.email.as_deref().unwrap_or(""),
                doc.party.phone1.as_deref().unwrap_or(""),
                doc.party.phone2.as_deref().unwrap_or(""),
                &tax_level,
            ])?;
        }
        ParsedDocument::Resolution(doc) => {
            wtr.write_record([
                "identification",
                "check_digit",
                "number",
                "prefix",
                "invoice_number",
                "invoice_limit",
                "life_months",
                "start_date",
                "end_date",
            ])?;
            wtr.write_record([
                &doc.identification.number,
                &doc.identification.check_digit,
                &doc.resolution.number.to_string(),
                doc.resolution.prefix.as_deref().unwrap_or(""),
                &optional_to_string(doc.resolution.invoice_number),
                &optional_to_string(doc.resolution.invoice_limit),
                &optional_to_string(doc.resolution.life_months),
                &doc.resolution.start_date.to_string(),
                &doc.resolution.end_date.to_string(),
            ])?;
        }
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn optional_to_string<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render an enum through its serde wire name (e.g. `PERSONA_NATURAL`).
fn serde_plain<T: serde::Serialize>(value: &T) -> anyhow::Result<String> {
    let json = serde_json::to_value(value)?;
    Ok(json.as_str().unwrap_or_default().to_string())
}

fn format_text(document: &ParsedDocument) -> String {
    let mut output = String::new();

    match document {
        ParsedDocument::Rut(doc) => {
            output.push_str(&format!(
                "RUT certificate for NIT {}\n\n",
                doc.identification.formatted()
            ));
            if let Some(company) = &doc.party.company_name {
                output.push_str(&format!("Company: {}\n", company));
            }
            let full_name = doc.party.full_name();
            if !full_name.is_empty() {
                output.push_str(&format!("Name: {}\n", full_name));
            }
            if let (Some(dept), Some(city)) = (&doc.party.dept, &doc.party.city) {
                output.push_str(&format!("Location: {}, {}\n", city, dept));
            }
            if let Some(address) = &doc.party.address {
                output.push_str(&format!("Address: {}\n", address));
            }
            if let Some(email) = &doc.party.email {
                output.push_str(&format!("Email: {}\n", email));
            }
            for phone in [&doc.party.phone1, &doc.party.phone2].into_iter().flatten() {
                output.push_str(&format!("Phone: {}\n", phone));
            }
            if let Some(level) = &doc.party.tax_level {
                output.push_str(&format!("Tax level: {:?}\n", level));
            }
        }
        ParsedDocument::Resolution(doc) => {
            output.push_str(&format!(
                "Billing resolution {} for NIT {}\n\n",
                doc.resolution.number,
                doc.identification.formatted()
            ));
            if let Some(prefix) = &doc.resolution.prefix {
                output.push_str(&format!("Prefix: {}\n", prefix));
            }
            if let (Some(from), Some(to)) =
                (doc.resolution.invoice_number, doc.resolution.invoice_limit)
            {
                output.push_str(&format!("Invoice range: {} - {}\n", from, to));
            }
            output.push_str(&format!(
                "Valid: {} to {}\n",
                doc.resolution.start_date, doc.resolution.end_date
            ));
            if let Some(months) = doc.resolution.life_months {
                output.push_str(&format!("Life: {} month(s)\n", months));
            }
        }
    }

    output
}
