use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;
use colored::Colorize;

use aiact_core::config::Config;
use aiact_core::engine::{classify, ClassificationResult, RiskLevel};
use aiact_core::harvest::Harvester;
use aiact_core::profile::SystemProfile;
use aiact_core::report::ClassificationReport;
use aiact_core::search::{check_curl_available, DuckDuckGo, NullSearch, SearchProvider};
use aiact_core::{AiActError, Result};

mod args;
use args::{Cli, Commands, ConfigAction, Shell};

/// Presentation-layer minimum; shorter descriptions still classify.
const MIN_DESCRIPTION_LEN: usize = 50;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let base_dir = resolve_base_dir(cli.base_dir.clone());

    let result = match cli.command {
        Some(Commands::Classify {
            name,
            company,
            description,
            file,
            search,
            no_search,
            max_results,
            json,
            output,
        }) => handle_classify(
            &base_dir,
            &name,
            &company,
            description.as_deref(),
            file.as_deref(),
            SearchChoice::from_flags(search, no_search),
            max_results,
            json,
            output.as_deref(),
            cli.quiet,
            cli.verbose,
        ),
        Some(Commands::Examples) => {
            handle_examples();
            Ok(())
        }
        Some(Commands::Config { action }) => handle_config(action, &base_dir),
        Some(Commands::Completions { shell }) => {
            handle_completions(shell);
            Ok(())
        }
        None => {
            Cli::command().print_help().ok();
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", "[ERROR]".red().bold(), e);
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

fn resolve_base_dir(cli_base: Option<PathBuf>) -> PathBuf {
    if let Some(base) = cli_base {
        return base;
    }

    if let Ok(base) = std::env::var("AIACT_BASE") {
        return PathBuf::from(base);
    }

    dirs::home_dir()
        .map(|h| h.join(".aiact"))
        .unwrap_or_else(|| PathBuf::from(".aiact"))
}

enum SearchChoice {
    Enabled,
    Disabled,
    FromConfig,
}

impl SearchChoice {
    fn from_flags(search: bool, no_search: bool) -> Self {
        if search {
            Self::Enabled
        } else if no_search {
            Self::Disabled
        } else {
            Self::FromConfig
        }
    }

    fn resolve(&self, config: &Config) -> bool {
        match self {
            Self::Enabled => true,
            Self::Disabled => false,
            Self::FromConfig => config.search.enabled,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn handle_classify(
    base_dir: &Path,
    name: &str,
    company: &str,
    description: Option<&str>,
    file: Option<&Path>,
    search_choice: SearchChoice,
    max_results: Option<usize>,
    json: bool,
    output: Option<&Path>,
    quiet: bool,
    verbose: bool,
) -> Result<()> {
    let description = match (description, file) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => {
            return Err(AiActError::InvalidInput {
                message: "provide a description with --description or --file".to_string(),
            })
        }
    };
    let description = description.trim().to_string();

    if description.len() < MIN_DESCRIPTION_LEN && !quiet {
        eprintln!(
            "{} description is short ({} chars); results improve with more detail",
            "Warning:".yellow(),
            description.len()
        );
    }

    let config = Config::load(base_dir)?;
    let search_enabled = search_choice.resolve(&config);
    let max_results = max_results.unwrap_or(config.search.max_results);

    let provider: Box<dyn SearchProvider> = if search_enabled {
        if check_curl_available() {
            Box::new(DuckDuckGo)
        } else {
            if !quiet {
                eprintln!(
                    "{} curl not found, continuing without web search",
                    "Warning:".yellow()
                );
            }
            Box::new(NullSearch)
        }
    } else {
        Box::new(NullSearch)
    };

    if !quiet {
        eprintln!("{} Harvesting information for {}", "[1/2]".cyan().bold(), name);
        if verbose {
            eprintln!("      Company: {}", company);
        }
        if search_enabled {
            eprintln!("      Searching the web for additional context...");
        }
    }

    let harvester = Harvester::new(provider.as_ref()).with_max_results(max_results);
    let profile = harvester.harvest(name, company, &description);

    if !quiet && search_enabled {
        eprintln!(
            "      Found information from {} sources",
            profile.search_sources.len()
        );
    }
    if !quiet {
        eprintln!(
            "{} Applying EU AI Act classification logic",
            "[2/2]".cyan().bold()
        );
    }

    let result = classify(&profile);
    let report = ClassificationReport::new(&profile, &result);

    if json {
        println!("{}", report.to_json()?);
    } else {
        render_classification(&profile, &result);
    }

    if let Some(path) = output {
        fs::write(path, report.to_json()?)?;
        if !quiet {
            eprintln!("{} {}", "Written:".green(), path.display());
        }
    }

    Ok(())
}

fn level_label(level: RiskLevel) -> colored::ColoredString {
    let text = level.as_str();
    match level {
        RiskLevel::Prohibited => text.red().bold(),
        RiskLevel::HighRisk => text.yellow().bold(),
        RiskLevel::TransparencyRequirements => text.blue().bold(),
        RiskLevel::LowRisk => text.green().bold(),
        RiskLevel::GpaiRequirements => text.magenta().bold(),
        RiskLevel::Exception => text.dimmed().bold(),
    }
}

/// Number of recommendations shown before collapsing the tail.
const RECOMMENDATION_PREVIEW: usize = 5;

fn render_classification(profile: &SystemProfile, result: &ClassificationResult) {
    println!();
    println!("{}", "System Profile".cyan().bold());
    println!("  Name: {}", profile.name);
    println!("  Company: {}", profile.company);
    println!("  Sector: {}", profile.sector);
    println!("  Deployment: {}", profile.deployment_context);
    println!("  User Base: {}", profile.user_base);
    println!("  Decision Role: {}", profile.decision_making_role);

    if profile.biometrics_involved {
        let purpose = profile.biometrics_purpose.as_deref().unwrap_or("unspecified");
        println!("  Biometrics: yes ({})", purpose);
    }

    if !profile.high_risk_context.is_empty() {
        println!("  High-Risk Contexts:");
        for ctx in &profile.high_risk_context {
            println!("    - {}", ctx);
        }
    }

    if !profile.search_sources.is_empty() {
        println!(
            "  Sources: {} web sources consulted",
            profile.search_sources.len()
        );
    }

    println!();
    println!(
        "{} {}",
        "Classification:".bold(),
        level_label(result.risk_level)
    );
    println!("{} {}", "Confidence:".bold(), result.confidence);

    println!();
    println!("{}", "Reasoning".cyan().bold());
    for (i, reason) in result.reasoning.iter().enumerate() {
        println!("  {}. {}", (i + 1).to_string().bold(), reason);
    }

    println!();
    println!("{}", "Relevant Provisions".cyan().bold());
    for article in &result.relevant_articles {
        println!("  - {}", article);
    }

    if !result.recommendations.is_empty() {
        println!();
        println!("{}", "Compliance Recommendations".cyan().bold());
        for (i, rec) in result
            .recommendations
            .iter()
            .take(RECOMMENDATION_PREVIEW)
            .enumerate()
        {
            println!("  {}. {}", (i + 1).to_string().bold(), rec);
        }
        if result.recommendations.len() > RECOMMENDATION_PREVIEW {
            println!(
                "  {}",
                format!(
                    "... and {} more",
                    result.recommendations.len() - RECOMMENDATION_PREVIEW
                )
                .dimmed()
            );
        }
    }
    println!();
}

struct ExampleCase {
    name: &'static str,
    company: &'static str,
    description: &'static str,
    expected: &'static str,
}

const EXAMPLES: &[ExampleCase] = &[
    ExampleCase {
        name: "MBUX Virtual Assistant",
        company: "Mercedes-Benz",
        description: "An AI-powered virtual assistant that enables natural conversations \
                      with drivers, providing personalized answers for navigation and \
                      points of interest while the vehicle is in operation.",
        expected: "High-Risk (safety component in vehicle)",
    },
    ExampleCase {
        name: "AI Recruitment Tool",
        company: "HireTech Inc",
        description: "An AI system that screens job applications, ranks candidates based \
                      on resume analysis, and recommends top candidates to hiring managers \
                      for interview selection.",
        expected: "High-Risk (employment decisions)",
    },
    ExampleCase {
        name: "Customer Service Chatbot",
        company: "ShopEasy",
        description: "A conversational AI chatbot that helps customers find products, \
                      track orders, and answer frequently asked questions on our \
                      e-commerce website.",
        expected: "Transparency Requirements (interactive AI)",
    },
    ExampleCase {
        name: "Medical Diagnosis Assistant",
        company: "MedAI Solutions",
        description: "An AI system that analyzes patient symptoms, medical history, and \
                      test results to suggest potential diagnoses and treatment options \
                      for physicians to review.",
        expected: "High-Risk (medical decision support)",
    },
    ExampleCase {
        name: "Social Media Filter",
        company: "PhotoApp",
        description: "An AI-powered image filter that enhances photos, applies artistic \
                      effects, and removes blemishes for personal social media posts.",
        expected: "Low-Risk (personal use)",
    },
];

fn handle_examples() {
    println!();
    println!("{}", "Example Use Cases".cyan().bold());
    println!();

    for (i, example) in EXAMPLES.iter().enumerate() {
        println!(
            "{}. {} {}",
            (i + 1).to_string().bold(),
            example.name.cyan(),
            format!("({})", example.company).dimmed()
        );
        println!("   {}", example.description);
        println!("   Expected: {}", example.expected.yellow());
        println!();
    }

    println!("{}", "To classify one:".dimmed());
    println!(
        "  {}",
        "aiact classify <name> --company <company> --description <text>".dimmed()
    );
}

fn handle_config(action: ConfigAction, base_dir: &Path) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(base_dir)?;
            match config.get(&key) {
                Some(value) => {
                    println!("{}", value);
                }
                None => {
                    return Err(AiActError::ConfigKeyNotFound { key });
                }
            }
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load(base_dir)?;
            config.set(&key, &value)?;
            config.save(base_dir)?;
            println!("{} {} = {}", "Set:".green(), key, value);
        }
        ConfigAction::List => {
            let config = Config::load(base_dir)?;
            println!();
            for (key, value) in config.list() {
                println!("{} = {}", key.cyan(), value);
            }
            println!();
        }
        ConfigAction::Init => {
            let path = Config::init(base_dir)?;
            println!("{} {}", "Initialized:".green(), path.display());
        }
        ConfigAction::Path => {
            let path = Config::path(base_dir);
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn handle_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => clap_complete::Shell::Bash,
        Shell::Zsh => clap_complete::Shell::Zsh,
        Shell::Fish => clap_complete::Shell::Fish,
        Shell::PowerShell => clap_complete::Shell::PowerShell,
        Shell::Elvish => clap_complete::Shell::Elvish,
    };
    generate(shell, &mut cmd, "aiact", &mut io::stdout());
}
