//! SPACE website CLI
//!
//! Thin wrapper around space-core for trying the site's forms and chat from a
//! terminal. Nothing is sent anywhere: commands print the links and payloads
//! the website would hand to the browser.
//!
//! ## Usage
//!
//! ```bash
//! # Walk the quote wizard and print the mailto / WhatsApp links
//! space quote --name "Jane Doe" --email jane@x.com --phone +911234567890 \
//!     --service Frontend --description "..." --budget 50k-150k --deadline "8 weeks"
//!
//! # Contact page form
//! space contact --name Kiran --email kiran@college.edu --project-type IEEE \
//!     --message "Need help with a paper"
//!
//! # Ask the project assistant
//! space chat what about the medilink project
//!
//! # Company contact links
//! space links
//!
//! # JSON body the CTA banner would POST to the email relay
//! space relay-payload --name Asha --email asha@x.com --phone 98450
//!
//! # Browse the catalog
//! space services --category ai-ml
//! space workshops --level beginner
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use space_core::catalog::{self, CategoryFilter, LevelFilter};
use space_core::chat::{self, Transcript};
use space_core::contact::{contact_email, contact_whatsapp, direct_email_link, validate_contact};
use space_core::cta::{validate_cta, whatsapp_intro};
use space_core::quote::{BudgetRange, ServiceKind};
use space_core::{
    ContactDraft, ContactField, CtaDraft, CtaField, FormField, QuoteField, QuoteWizard,
    RelayRequest, SiteConfig, ValidationErrors,
};

/// SPACE website tooling
#[derive(Parser)]
#[command(name = "space")]
#[command(version = "0.1.0")]
#[command(about = "SPACE website - quote, contact and chat tooling")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site config JSON (default: <config dir>/space-website/site.json)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fill in the quote wizard and print the resulting links
    Quote(QuoteArgs),

    /// Validate a contact page enquiry and print its links
    Contact(ContactArgs),

    /// Ask the project assistant a question
    Chat {
        /// The question (words are joined with spaces)
        #[arg(required = true)]
        question: Vec<String>,

        /// Print the whole transcript as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the company's contact links
    Links,

    /// Print the email relay request for a CTA enquiry
    RelayPayload(CtaArgs),

    /// List services, optionally filtered
    Services {
        /// Category id: all, development, ai-ml, education, academic, custom
        #[arg(long, default_value = "all")]
        category: String,

        /// Case-insensitive search over title, description and tools
        #[arg(short, long, default_value = "")]
        query: String,
    },

    /// List workshops, optionally filtered by level
    Workshops {
        /// all, beginner, intermediate or advanced
        #[arg(long, default_value = "all")]
        level: String,
    },
}

#[derive(clap::Args)]
struct QuoteArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    company: String,
    /// Service code: Frontend, FullStack, AIDL, IEEE, Training, Custom
    #[arg(long, default_value = "")]
    service: String,
    #[arg(long, default_value = "")]
    description: String,
    #[arg(long, default_value = "")]
    requirements: String,
    /// Budget code: <50k, 50k-150k, 150k-300k, 300k+, flexible
    #[arg(long, default_value = "")]
    budget: String,
    #[arg(long, default_value = "")]
    deadline: String,
    /// How the client heard about SPACE
    #[arg(long, default_value = "")]
    referral: String,
    /// Attachment file name
    #[arg(long, requires = "attachment_size")]
    attachment: Option<String>,
    /// Attachment size in bytes
    #[arg(long, requires = "attachment")]
    attachment_size: Option<u64>,
    /// Date printed in the email (default: today)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Also print the email body
    #[arg(long)]
    body: bool,
}

#[derive(clap::Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// Inquiry code: Frontend, FullStack, AIDL, Workshop, IEEE, Other
    #[arg(long, default_value = "")]
    project_type: String,
    #[arg(long, default_value = "")]
    message: String,
}

#[derive(clap::Args)]
struct CtaArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    phone: String,
    /// Dropdown label, e.g. "AI/ML Projects"
    #[arg(long)]
    service: Option<String>,
    #[arg(long, default_value = "")]
    message: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Quote(args) => run_quote(&config, args),
        Commands::Contact(args) => run_contact(&config, args),
        Commands::Chat { question, json } => run_chat(&question.join(" "), json),
        Commands::Links => {
            run_links(&config);
            Ok(())
        }
        Commands::RelayPayload(args) => run_relay_payload(&config, args),
        Commands::Services { category, query } => run_services(&category, &query),
        Commands::Workshops { level } => run_workshops(&level),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Default config location (<config dir>/space-website/site.json)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("space-website").join("site.json"))
}

/// Explicit path, else the default file if it exists, else built-in defaults.
/// Relay identifiers can still be overridden from the environment.
fn load_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    let mut config = match explicit {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => match default_config_path().filter(|p| p.exists()) {
            Some(path) => SiteConfig::load(&path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => {
                tracing::debug!("No config file, using defaults");
                SiteConfig::default()
            }
        },
    };

    let env = |key: &str| std::env::var(key).ok();
    config.apply_relay_overrides(
        env("SPACE_EMAILJS_SERVICE_ID").as_deref(),
        env("SPACE_EMAILJS_TEMPLATE_ID").as_deref(),
        env("SPACE_EMAILJS_PUBLIC_KEY").as_deref(),
    );
    Ok(config)
}

/// Print `field: message` lines to stderr.
fn print_errors<F: FormField>(errors: &ValidationErrors<F>) {
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field.name(), message);
    }
}

fn run_quote(config: &SiteConfig, args: QuoteArgs) -> Result<()> {
    let mut wizard = QuoteWizard::new();
    let fields = [
        (QuoteField::FullName, args.name),
        (QuoteField::Email, args.email),
        (QuoteField::Phone, args.phone),
        (QuoteField::Company, args.company),
        (QuoteField::ServiceNeeded, args.service),
        (QuoteField::ProjectDescription, args.description),
        (QuoteField::AdditionalRequirements, args.requirements),
        (QuoteField::BudgetRange, args.budget),
        (QuoteField::Deadline, args.deadline),
        (QuoteField::ReferralSource, args.referral),
    ];
    for (field, value) in fields {
        wizard.set_field(field, value);
    }
    if let (Some(name), Some(size)) = (args.attachment, args.attachment_size) {
        wizard.attach(name, size)?;
    }

    while !wizard.step().is_last() {
        let step = wizard.step();
        if let Err(errors) = wizard.next() {
            eprintln!("Step {} ({}) is incomplete:", step.number(), step.label());
            print_errors(&errors);
            if errors.contains(QuoteField::ServiceNeeded) {
                let codes: Vec<_> = ServiceKind::ALL.iter().map(|k| k.code()).collect();
                eprintln!("  accepted services: {}", codes.join(", "));
            }
            if errors.contains(QuoteField::BudgetRange) {
                let codes: Vec<_> = BudgetRange::ALL.iter().map(|b| b.code()).collect();
                eprintln!("  accepted budgets: {}", codes.join(", "));
            }
            anyhow::bail!("Quote request has {} invalid field(s)", errors.len());
        }
    }

    let today = args
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let submission = wizard.submit(config, today)?;

    println!("Quote request ready");
    println!("  Subject: {}", submission.email.subject);
    if let Some(estimate) = submission.estimate {
        println!("  Estimate: {}", estimate);
    }
    println!();
    println!("Email link:");
    println!("{}", submission.mailto);
    println!();
    println!("WhatsApp link:");
    println!("{}", submission.whatsapp_link);
    if args.body {
        println!();
        println!("{}", submission.email.body);
    }
    Ok(())
}

fn run_contact(config: &SiteConfig, args: ContactArgs) -> Result<()> {
    let draft = ContactDraft::new()
        .with(ContactField::Name, args.name)
        .with(ContactField::Email, args.email)
        .with(ContactField::Phone, args.phone)
        .with(ContactField::ProjectType, args.project_type)
        .with(ContactField::Message, args.message);

    let errors = validate_contact(&draft);
    if !errors.is_empty() {
        eprintln!("Contact form is incomplete:");
        print_errors(&errors);
        anyhow::bail!("Contact form has {} invalid field(s)", errors.len());
    }

    let email = contact_email(&draft);
    tracing::info!(subject = %email.subject, "Contact enquiry composed");
    println!("  Subject: {}", email.subject);
    println!();
    println!("Email link:");
    println!("{}", email.mailto(&config.contact.email));
    println!();
    println!("WhatsApp link:");
    println!("{}", config.contact.whatsapp_link(&contact_whatsapp(&draft)));
    Ok(())
}

fn run_chat(question: &str, json: bool) -> Result<()> {
    let now = chrono::Utc::now().timestamp_millis();
    let mut transcript = Transcript::new(now);
    if transcript.ask(question, now).is_none() {
        anyhow::bail!("Question is empty");
    }
    let delay = i64::try_from(chat::REPLY_DELAY.as_millis()).unwrap_or(i64::MAX);
    let answer = transcript
        .answer(question, now.saturating_add(delay))
        .text
        .clone();

    if json {
        println!("{}", serde_json::to_string_pretty(&transcript)?);
    } else {
        println!("{}", answer);
    }
    Ok(())
}

fn run_links(config: &SiteConfig) {
    let contact = &config.contact;
    println!("SPACE contact channels");
    println!();
    println!("  Email:    {}", direct_email_link(&contact.email));
    println!("  Phone:    {}", contact.tel_link());
    println!(
        "  WhatsApp: {}",
        contact.whatsapp_link(space_core::contact::GENERIC_WHATSAPP_TEXT)
    );
    println!("  Address:  {}", contact.address);
    println!("  Map:      {}", contact.map_link);
    println!();
    println!("Social:");
    for social in catalog::SOCIAL_LINKS {
        println!("  {:<10} {}", social.name, social.url);
    }
}

fn run_relay_payload(config: &SiteConfig, args: CtaArgs) -> Result<()> {
    let mut draft = CtaDraft::new()
        .with(CtaField::Name, args.name)
        .with(CtaField::Email, args.email)
        .with(CtaField::Phone, args.phone)
        .with(CtaField::Message, args.message);
    if let Some(service) = args.service {
        if service.parse::<space_core::CtaService>().is_err() {
            anyhow::bail!("Unknown service '{}'", service);
        }
        draft.set(CtaField::Service, service);
    }

    let errors = validate_cta(&draft);
    if !errors.is_empty() {
        eprintln!("Enquiry is incomplete:");
        print_errors(&errors);
        anyhow::bail!("Enquiry has {} invalid field(s)", errors.len());
    }

    let request = RelayRequest::from_cta(&draft, &config.relay)?;
    let json = serde_json::to_string_pretty(&request)?;
    tracing::info!(endpoint = %config.relay.endpoint, "Relay payload built");
    println!("POST {}", config.relay.endpoint);
    println!("{}", json);
    eprintln!(
        "WhatsApp fallback: {}",
        config.contact.whatsapp_link(&whatsapp_intro(&draft))
    );
    Ok(())
}

fn run_services(category: &str, query: &str) -> Result<()> {
    let filter = CategoryFilter::from_id(category)
        .with_context(|| format!("Unknown category '{}'", category))?;
    let hits = catalog::filter_services(filter, query);
    if hits.is_empty() {
        println!("No services match.");
        return Ok(());
    }
    for service in hits {
        println!("{} {}", service.icon, service.title);
        println!("    {} | {}", service.price, service.delivery_time);
        println!("    Tools: {}", service.tools.join(", "));
    }
    Ok(())
}

fn run_workshops(level: &str) -> Result<()> {
    let filter =
        LevelFilter::from_id(level).with_context(|| format!("Unknown level '{}'", level))?;
    for workshop in catalog::filter_workshops(filter) {
        println!("{} {} ({})", workshop.icon, workshop.title, workshop.level);
        println!(
            "    {} | {} | next batch {}",
            workshop.duration, workshop.price, workshop.next_batch
        );
    }
    Ok(())
}
