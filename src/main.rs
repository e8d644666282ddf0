use crossterm::style::Stylize;
use phonebook::command::{execute, parse_command, CommandOutcome, CommandParseError, COMMAND_WORDS};
use phonebook::config::Config;
use phonebook::store::ContactStore;
use phonebook::utils::app_paths::AppPaths;
use phonebook::utils::logging::{init_tracing, LogRingBuffer};
use reedline::{
    default_emacs_keybindings, ColumnarMenu, DefaultCompleter, Emacs, FileBackedHistory, KeyCode,
    KeyModifiers, MenuBuilder, Prompt, PromptEditMode, PromptHistorySearch,
    PromptHistorySearchStatus, Reedline, ReedlineEvent, ReedlineMenu, Signal,
};
use std::borrow::Cow;
use tracing::{info, warn};

mod table_display;

use table_display::display_contacts;

struct PhonebookPrompt;

impl Prompt for PhonebookPrompt {
    fn render_prompt_left(&self) -> Cow<'_, str> {
        Cow::Borrowed("phonebook")
    }

    fn render_prompt_right(&self) -> Cow<'_, str> {
        Cow::Borrowed("")
    }

    fn render_prompt_indicator(&self, edit_mode: PromptEditMode) -> Cow<'_, str> {
        match edit_mode {
            PromptEditMode::Default | PromptEditMode::Emacs => "> ".into(),
            PromptEditMode::Vi(vi_mode) => match vi_mode {
                reedline::PromptViMode::Normal => "N> ".into(),
                reedline::PromptViMode::Insert => "I> ".into(),
            },
            PromptEditMode::Custom(str) => format!("{str}> ").into(),
        }
    }

    fn render_prompt_multiline_indicator(&self) -> Cow<'_, str> {
        Cow::Borrowed("... ")
    }

    fn render_prompt_history_search_indicator(
        &self,
        history_search: PromptHistorySearch,
    ) -> Cow<'_, str> {
        let prefix = match history_search.status {
            PromptHistorySearchStatus::Passing => "",
            PromptHistorySearchStatus::Failing => "failing ",
        };
        Cow::Owned(format!(
            "({}reverse search: {})",
            prefix, history_search.term
        ))
    }
}

fn print_usage() {
    println!("{}", "Phonebook - keep a list of contacts".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  phonebook [OPTIONS]");
    println!();
    println!("{}", "Options:".yellow());
    println!("  {}         - Line-mode prompt instead of the TUI", "--classic".green());
    println!("  {}           - Start without the sample contacts", "--empty".green());
    println!("  {}     - Initialize configuration with wizard", "--init-config".green());
    println!("  {} - Generate config file with defaults", "--generate-config".green());
    println!("  {}            - Show this help", "--help".green());
    println!();
}

fn print_classic_help() {
    println!("{}", "Commands:".yellow());
    println!("  {} - Add a contact", "add <name>, <number>".green());
    println!("  {}          - Delete a contact by id", "delete <id>".green());
    println!("  {}      - Filter by name (no text clears)", "filter [text]".green());
    println!("  {}                 - Show contacts", "list".green());
    println!("  {}                - Show recent log entries", "\\log".green());
    println!("  {}              - Clear screen", "\\clear".green());
    println!("  {}               - Show this help", "\\help".green());
    println!("  {}               - Exit", "Ctrl+D".green());
    println!();
}

fn build_store(config: &Config, empty: bool) -> ContactStore {
    if empty || !config.behavior.seed_sample_contacts {
        ContactStore::default()
    } else {
        ContactStore::with_samples()
    }
}

fn run_classic(mut store: ContactStore, config: &Config, log_buffer: &LogRingBuffer) -> anyhow::Result<()> {
    print_classic_help();

    let mut line_editor = Reedline::create();

    match AppPaths::history_file() {
        Ok(history_file) => match FileBackedHistory::with_file(50, history_file) {
            Ok(history) => line_editor = line_editor.with_history(Box::new(history)),
            Err(e) => warn!(target: "classic", "History disabled: {}", e),
        },
        Err(e) => warn!(target: "classic", "History disabled: {}", e),
    }

    let words: Vec<String> = COMMAND_WORDS.iter().map(|w| w.to_string()).collect();
    let completer = Box::new(DefaultCompleter::new_with_wordlen(words, 2));

    let completion_menu = Box::new(
        ColumnarMenu::default()
            .with_name("command_completion")
            .with_columns(1)
            .with_column_width(None)
            .with_column_padding(2),
    );

    let mut keybindings = default_emacs_keybindings();
    keybindings.add_binding(
        KeyModifiers::NONE,
        KeyCode::Tab,
        ReedlineEvent::Menu("command_completion".to_string()),
    );

    let mut line_editor = line_editor
        .with_completer(completer)
        .with_menu(ReedlineMenu::EngineCompleter(completion_menu))
        .with_edit_mode(Box::new(Emacs::new(keybindings)));

    let prompt = PhonebookPrompt;
    let icons = &config.display.icons;

    loop {
        let sig = line_editor.read_line(&prompt)?;
        match sig {
            Signal::Success(buffer) => {
                let command = match parse_command(&buffer) {
                    Ok(command) => command,
                    Err(CommandParseError::Empty) => continue,
                    Err(e) => {
                        eprintln!("{}", e.to_string().red());
                        continue;
                    }
                };

                match execute(&mut store, command) {
                    Ok(CommandOutcome::Added(contact)) => {
                        println!(
                            "{}",
                            format!("{} Added {} {} [{}]", icons.success, contact.name, contact.number, contact.id)
                                .green()
                        );
                    }
                    Ok(CommandOutcome::Deleted(Some(contact))) => {
                        println!("{}", format!("{} Deleted {}", icons.info, contact.name).cyan());
                    }
                    Ok(CommandOutcome::Deleted(None)) => {
                        println!("{}", "No contact with that id.".yellow());
                    }
                    Ok(CommandOutcome::ShowList) => display_contacts(
                        &store.visible_contacts(),
                        store.len(),
                        store.filter(),
                        config.display.show_ids,
                    ),
                    Ok(CommandOutcome::ShowHelp) => print_classic_help(),
                    Ok(CommandOutcome::ClearScreen) => {
                        print!("{esc}[2J{esc}[1;1H", esc = 27 as char);
                    }
                    Ok(CommandOutcome::ShowLog) => {
                        for entry in log_buffer.get_recent(20) {
                            println!("{}", entry.format_for_display());
                        }
                    }
                    Err(e) => {
                        eprintln!("{}", format!("{} Error: {}", icons.error, e).red());
                    }
                }
            }
            Signal::CtrlD | Signal::CtrlC => {
                println!("\nGoodbye!");
                break;
            }
        }
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let log_buffer = init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }

    if args.contains(&"--init-config".to_string()) {
        let config = Config::init_wizard()?;
        println!("\nConfiguration initialized successfully!");
        if !config.display.use_glyphs {
            println!("Note: Simple mode enabled (ASCII icons)");
        }
        return Ok(());
    }

    if args.contains(&"--generate-config".to_string()) {
        let path = Config::get_config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Config::create_default_with_comments())?;
        println!("Configuration file created at: {:?}", path);
        println!("Edit this file to customize your phonebook.");
        return Ok(());
    }

    let config = Config::load().unwrap_or_else(|e| {
        warn!(target: "config", "Using default config: {}", e);
        Config::default()
    });

    let store = build_store(&config, args.contains(&"--empty".to_string()));
    info!(target: "phonebook", "Starting with {} contacts", store.len());

    if args.contains(&"--classic".to_string()) {
        return run_classic(store, &config, &log_buffer);
    }

    phonebook::ui::tui_app::run_tui_app(store, config, log_buffer)
}
