use anyhow::{bail, Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use foostrack::config::AppConfig;
use foostrack::matchmaking::{self, MatchType};
use foostrack::models::{GameType, Match, Player, PlayerId, Team};
use foostrack::storage::{append_match, append_player, read_league, StorageConfig};
use foostrack::{calculate, models::ModelError};

#[derive(Parser)]
#[command(name = "foostrack")]
#[command(about = "Table football league tracker with balanced match-making")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the leaderboard
    Stats,

    /// Generate balanced match suggestions
    Suggest {
        /// Available players (comma-separated IDs; default: whole roster)
        #[arg(long)]
        players: Option<String>,

        /// Match type: "singles" or "doubles"
        #[arg(long, default_value = "doubles")]
        match_type: String,

        /// Number of suggestions to return (default from config)
        #[arg(long)]
        count: Option<usize>,
    },

    /// Show the head-to-head record between two players
    HeadToHead {
        /// First player ID
        player1: String,

        /// Second player ID
        player2: String,
    },

    /// Add a player to the roster
    AddPlayer {
        /// Player ID (short, unique)
        #[arg(long)]
        id: String,

        /// Display name
        #[arg(long)]
        name: String,
    },

    /// Record a match result
    AddMatch {
        /// Team 1 players (comma-separated, 1 or 2 IDs)
        #[arg(long)]
        team1: String,

        /// Team 2 players (comma-separated, 1 or 2 IDs)
        #[arg(long)]
        team2: String,

        /// Goals scored by team 1
        #[arg(long)]
        team1_score: u32,

        /// Goals scored by team 2
        #[arg(long)]
        team2_score: u32,

        /// Game type: "casual", "tournament" or "league"
        #[arg(long, default_value = "casual")]
        game_type: String,

        /// Match duration in minutes
        #[arg(long)]
        duration: Option<u32>,

        /// Free-text note
        #[arg(long)]
        notes: Option<String>,
    },

    /// Check roster and match history integrity
    Validate,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = load_config(&cli.config);
    let data_dir = cli
        .data_dir
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| config.data_dir.clone());
    let storage = StorageConfig::new(data_dir);

    match cli.command {
        Commands::Stats => {
            let league = read_league(&storage)?;
            let stats = calculate::player_stats(&league);

            if stats.players.is_empty() {
                println!("No matches recorded yet.");
                return Ok(());
            }

            println!("=== Leaderboard ({} matches) ===\n", stats.total_matches);
            println!(
                "{:<20} {:>3} {:>3} {:>3} {:>3} {:>6} {:>5}",
                "Player", "P", "W", "L", "T", "Win%", "GD"
            );
            for p in stats.sorted_by_win_rate() {
                println!(
                    "{:<20} {:>3} {:>3} {:>3} {:>3} {:>6.1} {:>+5}",
                    p.player_name,
                    p.matches_played,
                    p.wins,
                    p.losses,
                    p.ties,
                    p.win_rate,
                    p.goal_difference
                );
            }
        }
        Commands::Suggest {
            players,
            match_type,
            count,
        } => {
            let league = read_league(&storage)?;

            let match_type = MatchType::parse(&match_type)
                .with_context(|| format!("Unknown match type: {}", match_type))?;

            let available: Vec<PlayerId> = match players {
                Some(list) => parse_id_list(&list),
                None => league.players.iter().map(|p| p.id.clone()).collect(),
            };

            if match_type == MatchType::Doubles && available.len() > config.matchmaking.max_pool_size
            {
                tracing::warn!(
                    "Doubles enumeration over {} players is expensive (3 x C(n,4) candidates); \
                     consider --players to narrow the pool",
                    available.len()
                );
            }

            let count = count.unwrap_or(config.matchmaking.suggestion_count);
            let suggestions =
                matchmaking::generate_suggestions(&league, &available, match_type, count);

            if suggestions.is_empty() {
                println!(
                    "Not enough available players for {} (need {}, have {}).",
                    match_type,
                    match_type.required_players(),
                    available.len()
                );
                return Ok(());
            }

            println!("=== Match Suggestions ({}) ===\n", match_type);
            for (i, s) in suggestions.iter().enumerate() {
                let team1: Vec<&str> = s.team1.iter().map(|p| league.player_name(p)).collect();
                let team2: Vec<&str> = s.team2.iter().map(|p| league.player_name(p)).collect();
                println!(
                    "{}. {} vs {} (score {:.2})",
                    i + 1,
                    team1.join(" & "),
                    team2.join(" & "),
                    s.score
                );
                println!("   {}", s.reasoning);
            }
        }
        Commands::HeadToHead { player1, player2 } => {
            let league = read_league(&storage)?;
            let p1 = PlayerId::from(player1.as_str());
            let p2 = PlayerId::from(player2.as_str());

            let h2h = calculate::head_to_head(&league, &p1, &p2);
            println!(
                "=== {} vs {} ===\n",
                league.player_name(&p1),
                league.player_name(&p2)
            );
            println!("Matches:        {}", h2h.total_matches);
            println!("{} wins: {:>6}", league.player_name(&p1), h2h.p1_wins);
            println!("{} wins: {:>6}", league.player_name(&p2), h2h.p2_wins);
            println!("Ties:           {}", h2h.ties);
        }
        Commands::AddPlayer { id, name } => {
            let league = read_league(&storage)?;
            let player_id = PlayerId::from(id.as_str());
            if league.players.iter().any(|p| p.id == player_id) {
                bail!("Player with ID '{}' already exists", id);
            }

            let player = Player::new(player_id, name.clone());
            append_player(&storage, &player)?;
            println!("Added player: {} ({})", name, id);
        }
        Commands::AddMatch {
            team1,
            team2,
            team1_score,
            team2_score,
            game_type,
            duration,
            notes,
        } => {
            let league = read_league(&storage)?;

            let team1 = parse_team(&team1)?;
            let team2 = parse_team(&team2)?;
            if team1.players().iter().any(|p| team2.contains(p)) {
                bail!("A player cannot be on both teams");
            }

            // Unknown players are allowed but worth flagging.
            for p in team1.players().iter().chain(team2.players()) {
                if !league.players.iter().any(|known| &known.id == p) {
                    tracing::warn!("Player '{}' is not in the roster", p);
                }
            }

            let game_type = match game_type.as_str() {
                "casual" => GameType::Casual,
                "tournament" => GameType::Tournament,
                "league" => GameType::League,
                other => bail!("Unknown game type: {}", other),
            };

            let mut m = Match::new(Utc::now(), team1, team2, team1_score, team2_score)
                .with_game_type(game_type);
            if let Some(minutes) = duration {
                m = m.with_duration(minutes);
            }
            if let Some(text) = notes {
                m = m.with_notes(text);
            }

            append_match(&storage, &m)?;
            let outcome = match m.winner() {
                Some(1) => "team 1 wins",
                Some(_) => "team 2 wins",
                None => "tie",
            };
            println!(
                "Recorded match {} ({} : {}, {})",
                m.id, m.team1_score, m.team2_score, outcome
            );
        }
        Commands::Validate => {
            let league = read_league(&storage)?;
            let mut issues: Vec<String> = Vec::new();

            let mut seen_players = std::collections::HashSet::new();
            for p in &league.players {
                if !seen_players.insert(p.id.clone()) {
                    issues.push(format!("Duplicate player ID: {}", p.id));
                }
            }

            let mut seen_matches = std::collections::HashSet::new();
            for m in &league.matches {
                if !seen_matches.insert(m.id.clone()) {
                    issues.push(format!("Duplicate match ID: {}", m.id));
                }
                for p in m.team1.players().iter().chain(m.team2.players()) {
                    if !league.players.iter().any(|known| &known.id == p) {
                        issues.push(format!("Match {} references unknown player {}", m.id, p));
                    }
                }
                if m.team1.players().iter().any(|p| m.team2.contains(p)) {
                    issues.push(format!("Match {} has a player on both teams", m.id));
                }
            }

            println!("=== Validation Report ===\n");
            println!("Players:     {}", league.players.len());
            println!("Matches:     {}", league.matches.len());
            println!("Tournaments: {}", league.tournaments.len());
            println!("Issues:      {}\n", issues.len());

            if !issues.is_empty() {
                for issue in &issues {
                    println!("  - {}", issue);
                }
                std::process::exit(1);
            }
            println!("OK");
        }
    }

    Ok(())
}

/// Load config from the given path, falling back to defaults if missing.
fn load_config(path: &str) -> AppConfig {
    let path = std::path::PathBuf::from(path);
    if path.exists() {
        match AppConfig::from_file(&path) {
            Ok(config) => return config,
            Err(e) => {
                tracing::warn!("Failed to load config {:?}: {}; using defaults", path, e);
            }
        }
    }
    AppConfig::default()
}

/// Parse a comma-separated list of player IDs.
fn parse_id_list(list: &str) -> Vec<PlayerId> {
    list.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(PlayerId::from)
        .collect()
}

/// Parse a comma-separated team specification (1 or 2 players).
fn parse_team(spec: &str) -> Result<Team, ModelError> {
    Team::new(parse_id_list(spec))
}
