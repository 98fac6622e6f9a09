//! Benchmark test for change-making performance.

#[cfg(test)]
mod tests {
    use changemaker_shared::types::Amount;
    use rust_decimal_macros::dec;
    use std::time::Instant;

    use crate::change::{ChangeEngine, Strategy};

    fn amounts(cents: &[i64]) -> Vec<Amount> {
        cents
            .iter()
            .map(|&c| Amount::from_minor_units(c, 2))
            .collect()
    }

    #[test]
    fn benchmark_dynamic_at_max_amount() {
        let engine = ChangeEngine::default();
        // Non-canonical: 0.30 = 0.15 + 0.15 beats 0.25 + 5 x 0.01.
        let denominations = amounts(&[1, 15, 25, 50, 100, 700, 1_300, 10_000, 45_000, 90_000]);

        let start = Instant::now();
        let change = engine
            .make_change(Amount::new(dec!(9999.99)), &denominations)
            .unwrap();
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: dynamic programming, target 9999.99 ===");
        println!("Duration: {:?}", duration);
        println!("Coins used: {}", change.coin_count());

        assert_eq!(change.strategy, Strategy::Dynamic);
        assert_eq!(change.total(), dec!(9999.99));
        assert!(
            duration.as_millis() < 5000,
            "Change making took {}ms, expected <5000ms",
            duration.as_millis()
        );
    }

    #[test]
    fn benchmark_greedy_cached_verdict() {
        let engine = ChangeEngine::default();
        let denominations = amounts(&[1, 2, 5, 10, 20, 50, 100, 200, 500, 1_000, 2_000, 5_000, 10_000]);

        // Warm the verdict cache.
        let _ = engine
            .make_change(Amount::new(dec!(1)), &denominations)
            .unwrap();

        let start = Instant::now();
        for cents in (0..1_000_000i64).step_by(997) {
            let change = engine
                .make_change(Amount::from_minor_units(cents, 2), &denominations)
                .unwrap();
            assert_eq!(change.total(), Amount::from_minor_units(cents, 2).value());
        }
        let duration = start.elapsed();

        println!("\n=== BENCHMARK: greedy with cached verdict, 1004 targets ===");
        println!("Duration: {:?}", duration);

        assert!(
            duration.as_millis() < 2000,
            "Greedy change took {}ms, expected <2000ms",
            duration.as_millis()
        );
    }
}
