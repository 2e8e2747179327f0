use criterion::{criterion_group, criterion_main, Criterion};
use gymrats_leaderboard::models::{Account, Activity};
use gymrats_leaderboard::services::gymrats::parse_workouts;
use gymrats_leaderboard::services::leaderboard::{Leaderboard, DEFAULT_TOP_N_VARIANTS};
use std::fs;
use std::hint::black_box;

/// A 12-week challenge with 40 athletes working out most days.
fn synthetic_challenge() -> Vec<Activity> {
    let start = chrono::DateTime::parse_from_rfc3339("2024-01-01T06:00:00-03:00")
        .expect("Failed to parse start date");

    let mut activities = Vec::new();
    for day in 0..84i64 {
        for athlete in 0..40u64 {
            if (day as u64 + athlete) % 3 == 0 {
                continue;
            }
            let occurred_at =
                start + chrono::Duration::days(day) + chrono::Duration::minutes(athlete as i64);
            activities.push(Activity {
                id: activities.len() as u64,
                account: Account {
                    id: athlete,
                    full_name: format!("Athlete {}", athlete),
                    profile_picture_url: None,
                },
                occurred_at: occurred_at.to_rfc3339(),
                duration: 20.0 + (athlete % 7) as f64 * 10.0,
                payload: serde_json::Map::new(),
            });
        }
    }
    activities
}

fn benchmark_leaderboard(c: &mut Criterion) {
    let fixture_content =
        fs::read_to_string("tests/fixtures/workouts.json").expect("Failed to read fixture");
    let fixture = parse_workouts(&fixture_content).expect("Failed to parse fixture");
    let synthetic = synthetic_challenge();

    let mut group = c.benchmark_group("leaderboard");

    group.bench_function("fixture_challenge", |b| {
        b.iter(|| Leaderboard::compute(black_box(&fixture), &DEFAULT_TOP_N_VARIANTS))
    });

    group.bench_function("twelve_week_challenge", |b| {
        b.iter(|| Leaderboard::compute(black_box(&synthetic), &DEFAULT_TOP_N_VARIANTS))
    });

    group.finish();
}

criterion_group!(benches, benchmark_leaderboard);
criterion_main!(benches);
