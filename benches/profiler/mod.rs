// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Knotwork-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Knotwork and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;

use pprof::criterion::{Output, PProfProfiler};

fn env_parse<T: FromStr + Copy>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

/// Criterion config with flamegraph profiling; warmup/measurement windows
/// are overridable through `BENCH_WARMUP_SECS`, `BENCH_MEASUREMENT_SECS`,
/// and `PROFILE_FREQ`.
pub fn criterion() -> Criterion {
    let frequency = env_parse("PROFILE_FREQ", 100i32).clamp(1, 1000);
    let warmup = Duration::from_secs(env_parse("BENCH_WARMUP_SECS", 3u64).clamp(1, 60));
    let measurement = Duration::from_secs(env_parse("BENCH_MEASUREMENT_SECS", 5u64).clamp(1, 120));

    Criterion::default()
        .warm_up_time(warmup)
        .measurement_time(measurement)
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
