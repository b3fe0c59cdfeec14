// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for the reconciliation core.
//!
//! Measures the cost of:
//! - A steady-state reconcile pass (no pending changes)
//! - A pass that consumes a one-shot seek trigger
//! - Draining a one-second burst of player time ticks

use criterion::{criterion_group, criterion_main, Criterion};
use iced_reel::application::port::MediaPlayer;
use iced_reel::binding::PlaybackBinding;
use iced_reel::config::PlayerConfig;
use iced_reel::player::simulated::SimulatedPlayer;
use std::hint::black_box;

fn settled_pair() -> (PlaybackBinding, SimulatedPlayer) {
    let mut player = SimulatedPlayer::new().with_media("clip.mp4", 600.0);
    let mut binding = PlaybackBinding::new(&PlayerConfig::new("clip.mp4"));
    binding.reconcile(&mut player);
    binding.reconcile(&mut player);
    player.clear_commands();
    (binding, player)
}

fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    group.bench_function("steady_state_pass", |b| {
        let (mut binding, mut player) = settled_pair();
        b.iter(|| {
            binding.reconcile(black_box(&mut player));
            player.clear_commands();
        });
    });

    group.bench_function("pass_with_seek_trigger", |b| {
        let (mut binding, mut player) = settled_pair();
        player.seek(300.0, 0.0, 0.0);
        b.iter(|| {
            binding.request_seek_back(10.0);
            binding.reconcile(black_box(&mut player));
            player.seek(300.0, 0.0, 0.0);
            player.clear_commands();
        });
    });

    group.finish();
}

fn bench_event_pump(c: &mut Criterion) {
    let mut group = c.benchmark_group("event_pump");

    group.bench_function("one_second_tick_burst", |b| {
        // Looping keeps the virtual clock running for the whole measurement.
        let mut player = SimulatedPlayer::new().with_media("clip.mp4", 600.0);
        let mut binding = PlaybackBinding::new(&PlayerConfig::new("clip.mp4").looping(true));
        binding.reconcile(&mut player);
        binding.reconcile(&mut player);
        b.iter(|| {
            player.advance(1.0);
            binding.pump_events(black_box(&mut player));
            player.clear_commands();
        });
    });

    group.finish();
}

criterion_group!(benches, bench_reconcile, bench_event_pump);
criterion_main!(benches);
