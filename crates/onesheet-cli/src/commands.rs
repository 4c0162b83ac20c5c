//! Command implementations.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, ValueEnum};
use eyre::{WrapErr, eyre};
use tracing::info;

use onesheet_core::models::customization::{CustomizationSettings, parse_css_color};
use onesheet_core::models::field::FieldPath;
use onesheet_core::models::request::{EXAMPLE_PROMPTS, InputMode};
use onesheet_export::share::{DEFAULT_SHARE_BASE, generate_share_reference, share_url};
use onesheet_export::{compile, transpile};
use onesheet_generate::GenerationBackend;
use onesheet_generate::bedrock::BedrockCapability;
use onesheet_generate::fixture::FixtureCapability;
use onesheet_session::Session;

use crate::config::{self, BackendKind, OnesheetConfig};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum BackendArg {
    /// Live Bedrock call; requires AWS credentials
    Live,
    /// Deterministic canned output; no credentials needed
    Fixture,
}

impl From<BackendArg> for BackendKind {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Live => BackendKind::Live,
            BackendArg::Fixture => BackendKind::Fixture,
        }
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Product description to generate from
    #[arg(short, long, conflicts_with_all = ["paste_file", "example"])]
    prompt: Option<String>,

    /// File with existing notes to restructure (paste mode)
    #[arg(long, conflicts_with = "example")]
    paste_file: Option<PathBuf>,

    /// Use one of the canned example prompts (1-3)
    #[arg(long)]
    example: Option<usize>,

    /// Tone: marketing, sales, investor, internal
    #[arg(short, long)]
    tone: Option<String>,

    /// Primary color as CSS hex, e.g. '#0ea5e9'
    #[arg(long)]
    color: Option<String>,

    /// Font style: inter, georgia, monospace
    #[arg(long)]
    font: Option<String>,

    /// Logo image reference shown in the header
    #[arg(long)]
    logo: Option<PathBuf>,

    /// Generation backend override
    #[arg(long, value_enum)]
    backend: Option<BackendArg>,

    /// Apply a field edit after generation, e.g. --edit 'headline=New Headline'.
    /// Repeatable; applied in order.
    #[arg(long = "edit", value_name = "FIELD=VALUE")]
    edits: Vec<String>,

    /// Write the document JSON here
    #[arg(long)]
    json: Option<PathBuf>,

    /// Export a PDF here
    #[arg(long)]
    pdf: Option<PathBuf>,

    /// Export a PNG here
    #[arg(long)]
    png: Option<PathBuf>,

    /// PNG raster density in pixels per inch
    #[arg(long, default_value_t = 300.0)]
    dpi: f32,

    /// Print a share link for the generated document
    #[arg(long)]
    share: bool,

    /// Give up on the generation call after this many seconds.
    /// The upstream flow has no deadline; this is a deliberate deviation.
    #[arg(long, default_value_t = 120)]
    timeout: u64,
}

pub async fn generate(args: GenerateArgs) -> eyre::Result<()> {
    let stored = if config::has_config() {
        config::load_config()?
    } else {
        OnesheetConfig::default()
    };

    let (raw_input, input_mode) = resolve_input(&args)?;

    let mut customization = CustomizationSettings::default();
    customization.tone = match &args.tone {
        Some(tone) => tone.parse()?,
        None => stored.default_tone,
    };
    customization.set_primary_color(args.color.as_deref().unwrap_or(&stored.default_color))?;
    customization.font_style = match &args.font {
        Some(font) => font.parse()?,
        None => stored.default_font,
    };
    customization.logo = args.logo.clone();

    let backend_kind = args.backend.map(BackendKind::from).unwrap_or(stored.backend);
    let backend = match backend_kind {
        BackendKind::Fixture => GenerationBackend::Fixture(FixtureCapability::new()),
        BackendKind::Live => {
            let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
                .region(aws_config::Region::new(stored.region.clone()))
                .load()
                .await;
            GenerationBackend::Bedrock(BedrockCapability::new(sdk_config, stored.model_id.clone()))
        }
    };

    info!(backend = ?backend_kind, mode = ?input_mode, "starting generation");

    let mut session = Session::with_customization(backend, customization);

    let outcome = tokio::time::timeout(
        Duration::from_secs(args.timeout),
        session.run_generation(raw_input.clone(), input_mode),
    )
    .await;

    match outcome {
        Err(_) => return Err(eyre!("generation timed out after {}s", args.timeout)),
        Ok(Err(e)) => {
            // The session kept the raw input; echo it back so nothing
            // has to be retyped. The cause itself is reported once, by
            // the returned error.
            eprintln!("your input was kept:\n{raw_input}");
            return Err(e.into());
        }
        Ok(Ok(_)) => {}
    }

    for pair in &args.edits {
        let (field, value) = pair
            .split_once('=')
            .ok_or_else(|| eyre!("--edit expects FIELD=VALUE, got {pair:?}"))?;
        let field: FieldPath = field.trim().parse()?;
        session.edit(field, value)?;
    }

    let document = session
        .controller()
        .document()
        .ok_or_else(|| eyre!("no document after generation"))?
        .clone();

    println!("{}", document.headline);
    println!("{}\n", document.subheadline);

    if let Some(path) = &args.json {
        std::fs::write(path, serde_json::to_string_pretty(&document)?)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?;
        println!("wrote {}", path.display());
    }

    if args.pdf.is_some() || args.png.is_some() {
        let markup = transpile(&document, session.customization());
        let compiled = compile(&markup)?;

        if let Some(path) = &args.pdf {
            std::fs::write(path, compiled.to_pdf()?)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
        if let Some(path) = &args.png {
            std::fs::write(path, compiled.to_png(args.dpi)?)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            println!("wrote {}", path.display());
        }
    }

    if args.share {
        let reference = generate_share_reference();
        println!(
            "share link (stub, not persisted): {}",
            share_url(DEFAULT_SHARE_BASE, &reference)
        );
    }

    Ok(())
}

fn resolve_input(args: &GenerateArgs) -> eyre::Result<(String, InputMode)> {
    if let Some(prompt) = &args.prompt {
        return Ok((prompt.clone(), InputMode::Prompt));
    }
    if let Some(path) = &args.paste_file {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        return Ok((text, InputMode::Paste));
    }
    if let Some(n) = args.example {
        let prompt = n
            .checked_sub(1)
            .and_then(|i| EXAMPLE_PROMPTS.get(i))
            .ok_or_else(|| eyre!("--example takes 1 through {}", EXAMPLE_PROMPTS.len()))?;
        return Ok((prompt.to_string(), InputMode::Prompt));
    }
    Err(eyre!("provide --prompt, --paste-file, or --example"))
}

#[derive(Debug, Args)]
pub struct ConfigureArgs {
    #[arg(long, value_enum, default_value = "fixture")]
    backend: BackendArg,

    #[arg(long, default_value = "us-east-1")]
    region: String,

    /// Bedrock inference profile ID for the live backend
    #[arg(long, default_value = "us.anthropic.claude-sonnet-4-20250514-v1:0")]
    model_id: String,

    #[arg(long, default_value = "marketing")]
    tone: String,

    #[arg(long, default_value = "#0ea5e9")]
    color: String,

    #[arg(long, default_value = "inter")]
    font: String,
}

pub fn configure(args: ConfigureArgs) -> eyre::Result<()> {
    parse_css_color(&args.color)?;

    let config = OnesheetConfig {
        backend: args.backend.into(),
        region: args.region,
        model_id: args.model_id,
        default_tone: args.tone.parse()?,
        default_color: args.color,
        default_font: args.font.parse()?,
        ..OnesheetConfig::default()
    };

    config::save_config(&config)?;
    println!("wrote {}", config::config_path()?.display());
    Ok(())
}

pub fn examples() {
    for (i, prompt) in EXAMPLE_PROMPTS.iter().enumerate() {
        println!("{}. {prompt}", i + 1);
    }
}
