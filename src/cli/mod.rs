//! Command-line interface for readworthy.
//!
//! Provides commands for browsing the catalog by category and difficulty,
//! searching, showing facet counts and item details, building shareable
//! browse links, and submitting new content.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use crate::config::{self, ResolvedConfig};
use crate::domain::{ContentId, ContentItem, ContentType, Difficulty, FilterState};
use crate::library::labels::{self, Locale};
use crate::library::{params, submit, BrowseSession, Catalog};

/// readworthy - Curated AI knowledge library
#[derive(Parser, Debug)]
#[command(name = "readworthy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to load (JSON or YAML); overrides configuration
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Display language (en, zh)
    #[arg(long, global = true)]
    pub locale: Option<Locale>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the catalog by category, difficulty and search text
    Browse {
        /// Content type to show
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Difficulty level to show
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,

        /// Search text (title, summary, submitter, tags)
        #[arg(short, long)]
        query: Option<String>,

        /// Initial state from a query string, e.g. "category=Video&difficulty=Beginner"
        #[arg(long)]
        params: Option<String>,

        /// Print the visible items as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show catalog-wide counts per category and difficulty
    Facets {
        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search the whole catalog
    Search {
        /// Search query
        query: String,
    },

    /// Show featured and recent content
    Home,

    /// Show details of a catalog item
    Show {
        /// Content ID
        content_id: String,
    },

    /// Print a shareable browse link for a filter
    Link {
        /// Content type
        #[arg(short, long, value_enum)]
        category: Option<CategoryArg>,

        /// Difficulty level
        #[arg(short, long, value_enum)]
        difficulty: Option<DifficultyArg>,
    },

    /// Submit a URL for inclusion in the library
    Submit {
        /// URL of the content
        url: String,
    },

    /// Show resolved configuration (debug)
    Config,
}

/// Content type for CLI (maps to ContentType)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    /// Articles, blog posts and papers
    Article,

    /// Podcast episodes
    Podcast,

    /// Videos
    Video,
}

impl From<CategoryArg> for ContentType {
    fn from(c: CategoryArg) -> Self {
        match c {
            CategoryArg::Article => ContentType::Article,
            CategoryArg::Podcast => ContentType::Podcast,
            CategoryArg::Video => ContentType::Video,
        }
    }
}

/// Difficulty level for CLI (maps to Difficulty)
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DifficultyArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<DifficultyArg> for Difficulty {
    fn from(d: DifficultyArg) -> Self {
        match d {
            DifficultyArg::Beginner => Difficulty::Beginner,
            DifficultyArg::Intermediate => Difficulty::Intermediate,
            DifficultyArg::Advanced => Difficulty::Advanced,
        }
    }
}

/// Everything a command needs: configuration, locale and the loaded catalog
struct AppContext {
    config: &'static ResolvedConfig,
    locale: Locale,
    catalog: Arc<Catalog>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        let cfg = config::config()?;
        let locale = self.locale.unwrap_or(cfg.display.locale);

        // Commands that don't need the catalog
        match &self.command {
            Commands::Link {
                category,
                difficulty,
            } => return print_link(*category, *difficulty),
            Commands::Submit { url } => return submit_content(url),
            Commands::Config => return show_config(cfg),
            _ => {}
        }

        let catalog_path = self.catalog.as_deref().or(cfg.catalog.as_deref());
        let catalog = Catalog::load_or_builtin(catalog_path)
            .await
            .context("Failed to load catalog")?;

        let ctx = AppContext {
            config: cfg,
            locale,
            catalog: Arc::new(catalog),
        };

        match self.command {
            Commands::Browse {
                category,
                difficulty,
                query,
                params,
                json,
            } => browse(&ctx, category, difficulty, query, params, json),
            Commands::Facets { json } => show_facets(&ctx, json),
            Commands::Search { query } => search_catalog(&ctx, &query),
            Commands::Home => show_home(&ctx),
            Commands::Show { content_id } => show_content(&ctx, &content_id),
            Commands::Link { .. } | Commands::Submit { .. } | Commands::Config => Ok(()),
        }
    }
}

/// Truncate to `max` characters, appending "..." when shortened
fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    } else {
        text.to_string()
    }
}

fn print_table(items: &[&ContentItem], locale: Locale) {
    println!("{:<6} {:<10} {:<14} {:<50}", "ID", "TYPE", "DIFFICULTY", "TITLE");
    println!("{}", "-".repeat(84));

    for item in items {
        println!(
            "{:<6} {:<10} {:<14} {:<50}",
            item.id.as_str(),
            labels::badge_label(item.content_type, locale),
            labels::difficulty_label(item.difficulty_level, locale),
            truncate(&item.title, 50)
        );
    }
}

/// Browse with the sidebar filter and search box
fn browse(
    ctx: &AppContext,
    category: Option<CategoryArg>,
    difficulty: Option<DifficultyArg>,
    query: Option<String>,
    initial_params: Option<String>,
    json: bool,
) -> Result<()> {
    let mut session = match initial_params {
        Some(qs) => BrowseSession::from_query_string(Arc::clone(&ctx.catalog), &qs),
        None => BrowseSession::new(Arc::clone(&ctx.catalog)),
    };

    // Explicit flags override decoded parameters field by field
    if category.is_some() || difficulty.is_some() {
        let current = session.filter();
        session.set_filter(FilterState {
            content_type: category.map(Into::into).or(current.content_type),
            difficulty: difficulty.map(Into::into).or(current.difficulty),
        });
    }

    if let Some(q) = query {
        session.set_search(q);
    }

    let heading = session.heading(ctx.locale);
    let summary = session.summary(ctx.locale);
    let link = session.share_link();
    let searching = session.is_searching();
    let visible = session.visible();

    if json {
        println!("{}", serde_json::to_string_pretty(&visible)?);
        return Ok(());
    }

    println!("{}", heading);
    println!("{}\n", summary);

    if visible.is_empty() {
        if searching {
            println!("No results found. Try different keywords or clear the search.");
        } else {
            println!("No content available. Try selecting a different content type or difficulty level.");
        }
    } else {
        print_table(&visible, ctx.locale);
    }

    println!("\nLink: {}", link);

    Ok(())
}

/// Show sidebar counts
fn show_facets(ctx: &AppContext, json: bool) -> Result<()> {
    let facets = ctx.catalog.facets();

    if json {
        println!("{}", serde_json::to_string_pretty(&facets)?);
        return Ok(());
    }

    println!("{:<24} {:>5}", labels::all_label(ctx.locale), facets.total);
    for ct in ContentType::ALL {
        println!("{:<24} {:>5}", labels::type_label(ct, ctx.locale), facets.type_total(ct));
        for d in Difficulty::ALL {
            println!(
                "  {:<22} {:>5}",
                labels::difficulty_label(d, ctx.locale),
                facets.count(ct, d)
            );
        }
    }

    Ok(())
}

/// Search the whole catalog
fn search_catalog(ctx: &AppContext, query: &str) -> Result<()> {
    let results = ctx.catalog.search(query);

    if results.is_empty() {
        println!("No results found for: {}", query);
        return Ok(());
    }

    println!("Found {} result(s) for \"{}\":\n", results.len(), query.trim());
    print_table(&results, ctx.locale);

    Ok(())
}

/// Featured, category shortcuts and recent content
fn show_home(ctx: &AppContext) -> Result<()> {
    let views = &ctx.config.views;
    let facets = ctx.catalog.facets();

    println!("Featured");
    println!("{}", "=".repeat(84));
    for item in ctx.catalog.most_recent(views.featured) {
        println!(
            "{}  [{} · {}]",
            item.title,
            labels::badge_label(item.content_type, ctx.locale),
            labels::difficulty_label(item.difficulty_level, ctx.locale)
        );
        println!("    by {} · {}", item.submitter, item.submitted_at.format("%b %-d"));
        let tags = labels::tag_preview(&item.tags, ctx.config.display.tag_preview);
        if !tags.is_empty() {
            println!("    {}", tags.join(", "));
        }
    }

    println!("\nBrowse by category");
    println!("{}", "=".repeat(84));
    for ct in ContentType::ALL {
        println!(
            "{:<12} {:>4}  {}",
            labels::type_label(ct, ctx.locale),
            facets.type_total(ct),
            params::browse_link(&FilterState::category(ct))
        );
    }

    println!("\nRecent");
    println!("{}", "=".repeat(84));
    let recent = ctx.catalog.most_recent(views.recent);
    print_table(&recent, ctx.locale);

    Ok(())
}

/// Show details of a catalog item
fn show_content(ctx: &AppContext, content_id: &str) -> Result<()> {
    let id = ContentId::from(content_id);
    let item = ctx
        .catalog
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("Content not found: {}", content_id))?;

    println!("{}", "=".repeat(84));
    println!("  ID: {}", item.id);
    println!("  Title: {}", item.title);
    println!("  Submitter: {}", item.submitter);
    println!("  Type: {}", labels::badge_label(item.content_type, ctx.locale));
    println!(
        "  Difficulty: {}",
        labels::difficulty_label(item.difficulty_level, ctx.locale)
    );
    println!("  Submitted: {}", item.submitted_at.format("%Y-%m-%d"));
    println!("  URL: {}", item.url);
    if !item.tags.is_empty() {
        println!("  Tags: {}", item.tags.join(", "));
    }
    println!("{}", "=".repeat(84));
    println!("\n{}", item.summary);

    Ok(())
}

/// Print a shareable browse link
fn print_link(category: Option<CategoryArg>, difficulty: Option<DifficultyArg>) -> Result<()> {
    let state = FilterState {
        content_type: category.map(Into::into),
        difficulty: difficulty.map(Into::into),
    };
    println!("{}", params::browse_link(&state));
    Ok(())
}

/// Acknowledge a content submission (the catalog is not modified)
fn submit_content(url: &str) -> Result<()> {
    let receipt = submit(url)?;

    eprintln!("{}", receipt.message());
    eprintln!("   ID: {}", receipt.provisional_id);
    eprintln!("   URL: {}", receipt.url);
    eprintln!("   Received: {}", receipt.received_at.to_rfc3339());

    Ok(())
}

/// Show the resolved configuration (for debugging)
fn show_config(cfg: &ResolvedConfig) -> Result<()> {
    println!("Readworthy Configuration");
    println!("{}", "=".repeat(84));
    println!();
    println!(
        "Config file: {}",
        cfg.config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none - using defaults)".to_string())
    );
    println!();
    println!("Paths:");
    println!("  Home:    {}", cfg.home.display());
    println!(
        "  Catalog: {}",
        cfg.catalog
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(built-in)".to_string())
    );
    println!();
    println!("Views:");
    println!("  Featured: {}", cfg.views.featured);
    println!("  Recent:   {}", cfg.views.recent);
    println!();
    println!("Display:");
    println!("  Locale:      {}", cfg.display.locale);
    println!("  Tag preview: {}", cfg.display.tag_preview);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_is_char_safe() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("屠龙之术 - Vol.64 40页PPT", 8), "屠龙之术 ...");
    }

    #[test]
    fn test_cli_parses_browse_flags() {
        let cli = Cli::try_parse_from([
            "readworthy",
            "browse",
            "--category",
            "podcast",
            "--difficulty",
            "intermediate",
            "-q",
            "agent",
        ])
        .unwrap();

        match cli.command {
            Commands::Browse {
                category,
                difficulty,
                query,
                ..
            } => {
                assert_eq!(category.map(ContentType::from), Some(ContentType::Podcast));
                assert_eq!(
                    difficulty.map(Difficulty::from),
                    Some(Difficulty::Intermediate)
                );
                assert_eq!(query.as_deref(), Some("agent"));
            }
            other => panic!("Expected browse, got {:?}", other),
        }
    }

    #[test]
    fn test_cli_parses_global_locale() {
        let cli = Cli::try_parse_from(["readworthy", "facets", "--locale", "zh"]).unwrap();
        assert_eq!(cli.locale, Some(Locale::Zh));
    }
}
