//! Headless advancement simulation - recruits a patrol and drives
//! random test outcomes through the store, then reports on pacing.
//!
//! Useful for eyeballing how fast skills advance under the current
//! rules config before a real campaign commits to it.

use clap::Parser;
use guardpost::advancement::TestOutcome;
use guardpost::character::CharacterStore;
use guardpost::core::types::CharacterId;
use guardpost::recruitment::RecruitGenerator;
use guardpost::tables::{load_overlay_dir, Rulebook};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "advancement_sim", about = "Simulate skill advancement pacing")]
struct Args {
    /// RNG seed for recruit generation and test outcomes
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Number of recruits in the patrol
    #[arg(long, default_value_t = 12)]
    recruits: usize,

    /// Total test outcomes to record across the patrol
    #[arg(long, default_value_t = 2000)]
    tests: u64,

    /// Worker threads hammering the store concurrently
    #[arg(long, default_value_t = 4)]
    workers: usize,

    /// Optional campaign overlay directory (TOML rule files)
    #[arg(long)]
    campaign_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut rulebook = Rulebook::builtin();
    if let Some(dir) = &args.campaign_dir {
        match load_overlay_dir(dir) {
            Ok(overlay) => rulebook.apply_overlay(overlay),
            Err(err) => {
                eprintln!("Failed to load campaign overlay: {}", err);
                std::process::exit(1);
            }
        }
    }

    println!("=== Guardpost Advancement Simulation ===\n");

    // Recruit the patrol
    let store = CharacterStore::new();
    let mut generator = RecruitGenerator::from_seed(args.seed);
    let mut ids: Vec<CharacterId> = Vec::with_capacity(args.recruits);

    for _ in 0..args.recruits {
        match generator.generate(&rulebook) {
            Ok(sheet) => {
                println!(
                    "  {} ({} fur, {})",
                    sheet.name,
                    sheet.fur_color.as_deref().unwrap_or("unknown"),
                    sheet.traits().first().map(String::as_str).unwrap_or("no trait"),
                );
                ids.push(store.insert(sheet));
            }
            Err(err) => {
                eprintln!("Recruitment failed: {}", err);
                std::process::exit(1);
            }
        }
    }

    if ids.is_empty() {
        println!("No recruits to test.");
        return;
    }

    println!("\nRecording {} tests across {} workers...\n", args.tests, args.workers);

    let level_ups = AtomicU64::new(0);
    let recorded = AtomicU64::new(0);

    let per_worker = args.tests / args.workers.max(1) as u64;
    std::thread::scope(|scope| {
        for worker in 0..args.workers.max(1) {
            let store = &store;
            let ids = &ids;
            let level_ups = &level_ups;
            let recorded = &recorded;
            let seed = args.seed.wrapping_add(worker as u64 + 1);

            scope.spawn(move || {
                let mut rng = ChaCha8Rng::seed_from_u64(seed);
                for _ in 0..per_worker {
                    let id = ids[rng.gen_range(0..ids.len())];
                    let outcome = if rng.gen_bool(0.5) {
                        TestOutcome::Success
                    } else {
                        TestOutcome::Failure
                    };

                    // Pick a skill off a snapshot; the recording itself
                    // runs under the record lock.
                    let skill = match store.snapshot(id) {
                        Ok((_, sheet)) => sheet.skills().keys().next().cloned(),
                        Err(_) => None,
                    };
                    let Some(skill) = skill else { continue };

                    let result = store.update(id, |sheet| sheet.record_skill_test(&skill, outcome));
                    if let Ok(record) = result {
                        recorded.fetch_add(1, Ordering::Relaxed);
                        if record.leveled_up {
                            level_ups.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                }
            });
        }
    });

    // Report
    println!("=== REPORT ===\n");
    println!("## Throughput");
    let stats = store.stats();
    println!("Tests recorded: {}", recorded.load(Ordering::Relaxed));
    println!("Level-ups: {}", level_ups.load(Ordering::Relaxed));
    println!("Store versions committed: {}", stats.total_versions);
    println!();

    println!("## Final patrol");
    for id in &ids {
        if let Ok((_, sheet)) = store.snapshot(*id) {
            let skills: Vec<String> = sheet
                .skills()
                .iter()
                .map(|(name, state)| format!("{} {}", name, state.level))
                .collect();
            println!("  {}: {}", sheet.name, skills.join(", "));
        }
    }
}
