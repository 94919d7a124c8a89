//! CLI Application logic
//!
//! Every mutating command follows the same cycle: load the stored aggregate
//! (or the default), apply one replace-on-write edit operation, save the new
//! value. The preview and the PDF are always recomputed from the stored
//! aggregate, so the views cannot drift apart.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use curriculo_edit::{
    add_education, add_experience, add_language, add_skill, add_social_link, add_soft_skill,
    remove_education, remove_experience, remove_language, remove_skill, remove_social_link,
    remove_soft_skill, set_show_as_icons, update_education, update_experience, update_language,
    update_personal, update_skill, update_social_link, update_soft_skill, EducationPatch,
    ExperiencePatch, LanguagePatch, PersonalPatch, SkillPatch, SocialLinkPatch,
};
use curriculo_model::{
    find_theme, CvData, CvTheme, LanguageLevel, SkillLevel, PREDEFINED_THEMES,
};
use curriculo_pdf::suggested_file_name;
use curriculo_render::{render, PreviewOptions};
use curriculo_store::Store;

#[derive(Parser)]
#[command(name = "curriculo")]
#[command(author, version, about = "Crie seu currículo profissional em minutos", long_about = None)]
struct Cli {
    /// Store directory holding the persisted CV and theme
    #[arg(long, global = true, default_value = ".curriculo")]
    store: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the themed preview of the CV
    Show {
        /// Disable colors in the output
        #[arg(long)]
        plain: bool,
    },

    /// Update the personal info fields
    Personal {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        location: Option<String>,
    },

    /// Manage experience entries
    Experience {
        #[command(subcommand)]
        action: ExperienceAction,
    },

    /// Manage education entries
    Education {
        #[command(subcommand)]
        action: EducationAction,
    },

    /// Manage technical skills
    Skill {
        #[command(subcommand)]
        action: SkillAction,
    },

    /// Manage soft skills
    Softskill {
        #[command(subcommand)]
        action: SoftSkillAction,
    },

    /// Manage languages
    Language {
        #[command(subcommand)]
        action: LanguageAction,
    },

    /// Manage social links
    Social {
        #[command(subcommand)]
        action: SocialAction,
    },

    /// Manage the color theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Generate the themed PDF
    Export {
        /// Output file (defaults to curriculo-<nome>.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Restore the default CV, clearing persisted data
    Reset {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum ExperienceAction {
    /// Append a new entry
    Add {
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Update the entry at INDEX
    Set {
        index: usize,
        #[arg(long)]
        company: Option<String>,
        #[arg(long)]
        position: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    /// Remove the entry at INDEX
    Remove { index: usize },
}

#[derive(Subcommand)]
enum EducationAction {
    /// Append a new entry
    Add {
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Update the entry at INDEX
    Set {
        index: usize,
        #[arg(long)]
        institution: Option<String>,
        #[arg(long)]
        degree: Option<String>,
        #[arg(long)]
        start_date: Option<String>,
        #[arg(long)]
        end_date: Option<String>,
    },
    /// Remove the entry at INDEX
    Remove { index: usize },
}

#[derive(Subcommand)]
enum SkillAction {
    /// Append a new skill
    Add {
        #[arg(long)]
        name: Option<String>,
        /// basico, intermediario ou avancado
        #[arg(long)]
        level: Option<String>,
    },
    /// Update the skill at INDEX
    Set {
        index: usize,
        #[arg(long)]
        name: Option<String>,
        /// basico, intermediario ou avancado
        #[arg(long)]
        level: Option<String>,
    },
    /// Remove the skill at INDEX
    Remove { index: usize },
}

#[derive(Subcommand)]
enum SoftSkillAction {
    /// Append a new soft skill
    Add { value: Option<String> },
    /// Replace the soft skill at INDEX
    Set { index: usize, value: String },
    /// Remove the soft skill at INDEX
    Remove { index: usize },
}

#[derive(Subcommand)]
enum LanguageAction {
    /// Append a new language
    Add {
        #[arg(long)]
        name: Option<String>,
        /// basico, intermediario, avancado, fluente ou nativo
        #[arg(long)]
        level: Option<String>,
    },
    /// Update the language at INDEX
    Set {
        index: usize,
        #[arg(long)]
        name: Option<String>,
        /// basico, intermediario, avancado, fluente ou nativo
        #[arg(long)]
        level: Option<String>,
    },
    /// Remove the language at INDEX
    Remove { index: usize },
}

#[derive(Subcommand)]
enum SocialAction {
    /// Append a new social link
    Add {
        /// LinkedIn, GitHub, Twitter, Instagram, Facebook, YouTube,
        /// Portfolio, Outro, or any other name
        #[arg(long)]
        platform: String,
        #[arg(long)]
        url: String,
    },
    /// Update the link at INDEX
    Set {
        index: usize,
        #[arg(long)]
        platform: Option<String>,
        #[arg(long)]
        url: Option<String>,
        #[arg(long)]
        icon: Option<String>,
    },
    /// Remove the link at INDEX
    Remove { index: usize },
    /// Choose between icon chips and full link lines
    Display {
        /// true for icon chips, false for one platform: url line per link
        #[arg(long, action = ArgAction::Set)]
        icons: bool,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Set individual theme colors (hex strings)
    Set {
        #[arg(long)]
        primary: Option<String>,
        #[arg(long)]
        text: Option<String>,
        #[arg(long)]
        background: Option<String>,
    },
    /// List the predefined themes
    List,
    /// Apply a predefined theme by name
    Apply { name: String },
    /// Restore the default theme
    Reset,
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let store = Store::open(&cli.store)
        .with_context(|| format!("Failed to open store at {}", cli.store.display()))?;

    match cli.command {
        Commands::Show { plain } => show_command(&store, plain),
        Commands::Personal {
            name,
            email,
            phone,
            location,
        } => with_cv(&store, |cv| {
            Ok(update_personal(
                cv,
                PersonalPatch {
                    name,
                    email,
                    phone,
                    location,
                },
            ))
        }),
        Commands::Experience { action } => experience_command(&store, action),
        Commands::Education { action } => education_command(&store, action),
        Commands::Skill { action } => skill_command(&store, action),
        Commands::Softskill { action } => soft_skill_command(&store, action),
        Commands::Language { action } => language_command(&store, action),
        Commands::Social { action } => social_command(&store, action),
        Commands::Theme { action } => theme_command(&store, action),
        Commands::Export { output } => export_command(&store, output),
        Commands::Reset { yes } => reset_command(&store, yes),
    }
}

/// Load the persisted aggregate, falling back to the fixed default
fn load_cv(store: &Store) -> CvData {
    store.load_data().unwrap_or_default()
}

/// Load the persisted theme, falling back to the default palette
fn load_theme(store: &Store) -> CvTheme {
    store.load_theme().unwrap_or_default()
}

/// Apply one edit operation to the stored aggregate and persist the result
fn with_cv<F>(store: &Store, edit: F) -> Result<()>
where
    F: FnOnce(&CvData) -> Result<CvData>,
{
    let cv = load_cv(store);
    let next = edit(&cv)?;
    store.save_data(&next).context("Failed to save CV data")?;
    Ok(())
}

fn show_command(store: &Store, plain: bool) -> Result<()> {
    let cv = load_cv(store);
    let theme = load_theme(store);
    let options = PreviewOptions { color: !plain };
    print!("{}", render(&cv, &theme, &options));
    Ok(())
}

fn experience_command(store: &Store, action: ExperienceAction) -> Result<()> {
    match action {
        ExperienceAction::Add {
            company,
            position,
            start_date,
            end_date,
            description,
        } => with_cv(store, |cv| {
            let next = add_experience(cv);
            let index = next.experience.len() - 1;
            let next = update_experience(
                &next,
                index,
                ExperiencePatch {
                    company,
                    position,
                    start_date,
                    end_date,
                    description,
                },
            )?;
            println!("Experiência adicionada (índice {})", index);
            Ok(next)
        }),
        ExperienceAction::Set {
            index,
            company,
            position,
            start_date,
            end_date,
            description,
        } => with_cv(store, |cv| {
            Ok(update_experience(
                cv,
                index,
                ExperiencePatch {
                    company,
                    position,
                    start_date,
                    end_date,
                    description,
                },
            )?)
        }),
        ExperienceAction::Remove { index } => with_cv(store, |cv| {
            let next = remove_experience(cv, index)?;
            println!("Experiência removida (índice {})", index);
            Ok(next)
        }),
    }
}

fn education_command(store: &Store, action: EducationAction) -> Result<()> {
    match action {
        EducationAction::Add {
            institution,
            degree,
            start_date,
            end_date,
        } => with_cv(store, |cv| {
            let next = add_education(cv);
            let index = next.education.len() - 1;
            let next = update_education(
                &next,
                index,
                EducationPatch {
                    institution,
                    degree,
                    start_date,
                    end_date,
                },
            )?;
            println!("Educação adicionada (índice {})", index);
            Ok(next)
        }),
        EducationAction::Set {
            index,
            institution,
            degree,
            start_date,
            end_date,
        } => with_cv(store, |cv| {
            Ok(update_education(
                cv,
                index,
                EducationPatch {
                    institution,
                    degree,
                    start_date,
                    end_date,
                },
            )?)
        }),
        EducationAction::Remove { index } => with_cv(store, |cv| {
            let next = remove_education(cv, index)?;
            println!("Educação removida (índice {})", index);
            Ok(next)
        }),
    }
}

fn parse_skill_level(value: Option<String>) -> Result<Option<SkillLevel>> {
    value
        .map(|v| {
            v.parse::<SkillLevel>()
                .with_context(|| format!("Nível inválido: {} (use basico, intermediario ou avancado)", v))
        })
        .transpose()
}

fn parse_language_level(value: Option<String>) -> Result<Option<LanguageLevel>> {
    value
        .map(|v| {
            v.parse::<LanguageLevel>().with_context(|| {
                format!(
                    "Nível inválido: {} (use basico, intermediario, avancado, fluente ou nativo)",
                    v
                )
            })
        })
        .transpose()
}

fn skill_command(store: &Store, action: SkillAction) -> Result<()> {
    match action {
        SkillAction::Add { name, level } => {
            let level = parse_skill_level(level)?;
            with_cv(store, |cv| {
                let next = add_skill(cv);
                let index = next.skills.len() - 1;
                let next = update_skill(&next, index, SkillPatch { name, level })?;
                println!("Habilidade adicionada (índice {})", index);
                Ok(next)
            })
        }
        SkillAction::Set { index, name, level } => {
            let level = parse_skill_level(level)?;
            with_cv(store, |cv| {
                Ok(update_skill(cv, index, SkillPatch { name, level })?)
            })
        }
        SkillAction::Remove { index } => with_cv(store, |cv| {
            let next = remove_skill(cv, index)?;
            println!("Habilidade removida (índice {})", index);
            Ok(next)
        }),
    }
}

fn soft_skill_command(store: &Store, action: SoftSkillAction) -> Result<()> {
    match action {
        SoftSkillAction::Add { value } => with_cv(store, |cv| {
            let next = add_soft_skill(cv);
            let index = next.soft_skills.len() - 1;
            let next = match value {
                Some(value) => update_soft_skill(&next, index, value)?,
                None => next,
            };
            println!("Soft skill adicionada (índice {})", index);
            Ok(next)
        }),
        SoftSkillAction::Set { index, value } => {
            with_cv(store, |cv| Ok(update_soft_skill(cv, index, value)?))
        }
        SoftSkillAction::Remove { index } => with_cv(store, |cv| {
            let next = remove_soft_skill(cv, index)?;
            println!("Soft skill removida (índice {})", index);
            Ok(next)
        }),
    }
}

fn language_command(store: &Store, action: LanguageAction) -> Result<()> {
    match action {
        LanguageAction::Add { name, level } => {
            let level = parse_language_level(level)?;
            with_cv(store, |cv| {
                let next = add_language(cv);
                let index = next.languages.len() - 1;
                let next = update_language(&next, index, LanguagePatch { name, level })?;
                println!("Idioma adicionado (índice {})", index);
                Ok(next)
            })
        }
        LanguageAction::Set { index, name, level } => {
            let level = parse_language_level(level)?;
            with_cv(store, |cv| {
                Ok(update_language(cv, index, LanguagePatch { name, level })?)
            })
        }
        LanguageAction::Remove { index } => with_cv(store, |cv| {
            let next = remove_language(cv, index)?;
            println!("Idioma removido (índice {})", index);
            Ok(next)
        }),
    }
}

fn social_command(store: &Store, action: SocialAction) -> Result<()> {
    match action {
        SocialAction::Add { platform, url } => with_cv(store, |cv| {
            let next = add_social_link(cv, platform, url);
            println!(
                "Rede social adicionada (índice {})",
                next.social_links.len() - 1
            );
            Ok(next)
        }),
        SocialAction::Set {
            index,
            platform,
            url,
            icon,
        } => with_cv(store, |cv| {
            Ok(update_social_link(
                cv,
                index,
                SocialLinkPatch {
                    platform,
                    url,
                    icon_name: icon,
                },
            )?)
        }),
        SocialAction::Remove { index } => with_cv(store, |cv| {
            let next = remove_social_link(cv, index)?;
            println!("Rede social removida (índice {})", index);
            Ok(next)
        }),
        SocialAction::Display { icons } => {
            with_cv(store, |cv| Ok(set_show_as_icons(cv, icons)))
        }
    }
}

fn theme_command(store: &Store, action: ThemeAction) -> Result<()> {
    match action {
        ThemeAction::Set {
            primary,
            text,
            background,
        } => {
            let mut theme = load_theme(store);
            if let Some(primary) = primary {
                theme.primary = primary;
            }
            if let Some(text) = text {
                theme.text = text;
            }
            if let Some(background) = background {
                theme.background = background;
            }
            store.save_theme(&theme).context("Failed to save theme")?;
            Ok(())
        }
        ThemeAction::List => {
            let current = load_theme(store);
            for theme in PREDEFINED_THEMES {
                let marker = if theme.primary == current.primary
                    && theme.background == current.background
                {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{} {:<20} {}  {}  {}",
                    marker, theme.name, theme.primary, theme.text, theme.background
                );
            }
            Ok(())
        }
        ThemeAction::Apply { name } => {
            let Some(named) = find_theme(&name) else {
                bail!("Tema não encontrado: {} (use 'theme list')", name);
            };
            store
                .save_theme(&named.to_theme())
                .context("Failed to save theme")?;
            println!("Tema aplicado: {}", named.name);
            Ok(())
        }
        ThemeAction::Reset => {
            store.reset_theme().context("Failed to reset theme")?;
            println!("Tema restaurado para o padrão.");
            Ok(())
        }
    }
}

fn export_command(store: &Store, output: Option<PathBuf>) -> Result<()> {
    let cv = load_cv(store);
    let theme = load_theme(store);

    println!("Gerando PDF...");
    let bytes = match curriculo_pdf::render_pdf(&cv, &theme) {
        Ok(bytes) => bytes,
        Err(e) => {
            // Not retried automatically; the user re-invokes the export
            eprintln!("Houve um problema ao gerar o PDF. Tente novamente.");
            bail!("Erro ao gerar PDF: {}", e);
        }
    };

    let output_path = output.unwrap_or_else(|| PathBuf::from(suggested_file_name(&cv)));
    fs::write(&output_path, &bytes)
        .with_context(|| format!("Failed to write PDF: {}", output_path.display()))?;

    println!("PDF gerado!");
    println!("  Arquivo: {}", output_path.display());
    println!("  Tamanho: {} bytes", bytes.len());
    Ok(())
}

fn reset_command(store: &Store, yes: bool) -> Result<()> {
    if !yes && !confirm_reset(store.root())? {
        println!("Operação cancelada.");
        return Ok(());
    }

    store.reset_data().context("Failed to reset CV data")?;
    println!("Currículo restaurado para o padrão.");
    Ok(())
}

/// Ask for explicit confirmation before the destructive reset
fn confirm_reset(root: &Path) -> Result<bool> {
    print!(
        "Isso apaga todos os dados do currículo em {}. Tem certeza? [s/N] ",
        root.display()
    );
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "s" || answer == "sim")
}
