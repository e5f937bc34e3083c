use std::error::Error;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};
use word_guess::config::{DEFAULT_CONFIG_FILE, GameConfig};
use word_guess::data::{WordBank, WordSource, read_word_bank};
use word_guess::error::format_round_message;
use word_guess::leaderboard::Leaderboard;
use word_guess::session::{GameSession, GameStore, Turn, category_infos, reset_category};
use word_guess::settings::SettingsSnapshot;
use word_guess::store::{ProfileStore, YamlFileStore};
use word_guess::view_models::RoundView;
use word_guess::{Difficulty, RoundEvent};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Fichero de configuración YAML.
    #[clap(short, long, value_parser, default_value = DEFAULT_CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    config: PathBuf,

    /// Usuario; tiene prioridad sobre el de la configuración.
    #[clap(short, long, value_parser)]
    user: Option<String>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Juega una categoría desde el nivel guardado.
    Play {
        #[clap(short, long, value_parser)]
        difficulty: Difficulty,
        #[clap(short = 'k', long, value_parser)]
        category: String,
    },
    /// Lista las categorías de una dificultad con su progreso.
    Categories {
        #[clap(short, long, value_parser)]
        difficulty: Difficulty,
    },
    /// Muestra la clasificación.
    Leaderboard {
        #[clap(short, long, value_parser, default_value_t = 10)]
        top: usize,
    },
    /// Vuelve una categoría al primer nivel.
    Restart {
        #[clap(short, long, value_parser)]
        difficulty: Difficulty,
        #[clap(short = 'k', long, value_parser)]
        category: String,
    },
    /// Consulta o cambia música y vibración.
    Settings {
        #[clap(long, value_enum)]
        music: Option<Toggle>,
        #[clap(long, value_enum)]
        vibration: Option<Toggle>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Toggle {
    On,
    Off,
}

impl Toggle {
    fn enabled(self) -> bool {
        matches!(self, Toggle::On)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = GameConfig::load(&args.config)?;
    if let Some(user) = args.user {
        config.user = user;
        config.validate()?;
    }

    let bank = read_word_bank(config.word_bank.as_deref())?;
    let mut store = YamlFileStore::open(&config.store_path)?;
    log::debug!(
        "Banco con {} palabras, progreso en {}",
        bank.total_words(),
        store.path().display()
    );

    match args.command {
        Command::Play {
            difficulty,
            category,
        } => {
            let category = canonical(&bank, difficulty, &category);
            play(&config, &mut store, &bank, difficulty, &category)?;
        }
        Command::Categories { difficulty } => {
            println!("Categorías {difficulty}:");
            for info in category_infos(&bank, &store, &config.user, difficulty) {
                println!("  {}", info.label());
            }
        }
        Command::Leaderboard { top } => {
            let board = Leaderboard::load(&store)?;
            println!(
                "🏆 Clasificación ({} jugadores, máximo {})",
                board.player_count(),
                board.top_score()
            );
            for entry in board.top(top) {
                let marker = if entry.user == config.user { "👉" } else { "  " };
                println!("{marker} {:>3}. {:<16} {:>6}", entry.rank, entry.user, entry.score);
            }
        }
        Command::Restart {
            difficulty,
            category,
        } => {
            let category = canonical(&bank, difficulty, &category);
            reset_category(&mut store, &config.user, difficulty, &category)?;
            println!("🔄 {difficulty}/{category} vuelve al nivel 1.");
        }
        Command::Settings { music, vibration } => {
            let mut settings = store.settings()?;
            if let Some(t) = music {
                settings.music_enabled = t.enabled();
            }
            if let Some(t) = vibration {
                settings.vibration_enabled = t.enabled();
            }
            if music.is_some() || vibration.is_some() {
                store.set_settings(settings)?;
            }
            println!(
                "🎵 Música: {} · 📳 Vibración: {}",
                on_off(settings.music_enabled),
                on_off(settings.vibration_enabled)
            );
        }
    }

    Ok(())
}

fn canonical(bank: &WordBank, difficulty: Difficulty, category: &str) -> String {
    bank.canonical_category(difficulty, category)
        .unwrap_or_else(|| category.to_string())
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "sí" } else { "no" }
}

fn play<S: GameStore>(
    config: &GameConfig,
    store: &mut S,
    bank: &WordBank,
    difficulty: Difficulty,
    category: &str,
) -> Result<(), Box<dyn Error>> {
    let settings = store.settings().unwrap_or_else(|e| {
        log::warn!("No se pudieron leer las preferencias: {e}");
        SettingsSnapshot::default()
    });

    let mut session = match GameSession::enter(
        store,
        bank,
        &config.user,
        difficulty,
        category,
        config.policy,
    ) {
        Ok(session) => session,
        Err(e) => {
            println!("{}", format_round_message(&e));
            return Ok(());
        }
    };

    println!("Letras para adivinar · '?' pista · '-' borrar · ':q' salir");
    print_round(&session.view());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input == ":q" {
            break;
        }

        for c in input.chars() {
            match c {
                '?' => match session.hint() {
                    Ok(event) => report_event(&event, config.policy.level_reward),
                    Err(e) => println!("{}", format_round_message(&e)),
                },
                '-' => {
                    session.erase();
                }
                c => {
                    let turn = session.guess(c, &settings);
                    report_turn(&turn, config.policy.level_reward);
                    if turn.event == RoundEvent::WrongGuess {
                        thread::sleep(Duration::from_millis(config.feedback_delay_ms));
                        session.clear_feedback();
                    }
                }
            }
            if session.state().is_completed() {
                break;
            }
        }

        if session.state().is_completed() {
            println!(
                "🎉 ¡Enhorabuena! Terminaste {difficulty}/{category}. Puntuación: {} (mejor: {})",
                session.state().score(),
                session.best_score()
            );
            break;
        }
        print_round(&session.view());
    }

    Ok(())
}

fn print_round(view: &RoundView) {
    println!();
    println!("{}", view.header());
    println!("💡 {}", view.hint);
    println!("   {}", view.board());
    print!("> ");
    let _ = io::stdout().flush();
}

fn report_turn(turn: &Turn, reward: u32) {
    if turn.feedback.vibrate {
        println!("📳");
    }
    if turn.feedback.success_cue {
        println!("🔔");
    }
    report_event(&turn.event, reward);
}

fn report_event(event: &RoundEvent, reward: u32) {
    match event {
        RoundEvent::WrongGuess => println!("❌ Incorrecto. Intenta de nuevo."),
        RoundEvent::LevelSolved { rewarded: true, .. } => {
            println!("✅ ¡Correcto! +{reward} puntos, siguiente nivel.")
        }
        RoundEvent::LevelSolved { rewarded: false, .. } => {
            println!("✅ Palabra revelada, siguiente nivel.")
        }
        RoundEvent::LetterRevealed { position, letter } => {
            println!("💡 Letra {} revelada: {letter}", position + 1)
        }
        _ => {}
    }
}
